//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::AccountId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AccountConfig;
use crate::application::{
    GetAccountUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;
use crate::presentation::dto::{AccountResponse, LoginRequest, RegisterRequest};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

/// POST /api/accounts/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<(StatusCode, Json<AccountResponse>)>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let summary = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(summary.into())))
}

/// POST /api/accounts/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let summary = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(summary.into()))
}

/// GET /api/accounts/{id}
pub async fn get_account<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
) -> AccountResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let summary = GetAccountUseCase::new(state.repo.clone())
        .execute(&AccountId::from_uuid(id))
        .await?;

    Ok(Json(summary.into()))
}
