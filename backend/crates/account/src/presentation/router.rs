//! Account Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the Account router with PostgreSQL repository
pub fn account_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create an Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/{id}", get(handlers::get_account::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryAccountRepository;

    fn app() -> Router {
        account_router_generic(InMemoryAccountRepository::new(), AccountConfig::development())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn registration() -> Value {
        json!({
            "email": "news@channel.example",
            "password": "Amber-Lighthouse-9",
            "role": "CHANNEL_ADMIN"
        })
    }

    #[tokio::test]
    async fn test_register_login_get() {
        let app = app();

        let (status, created) = send(&app, "POST", "/register", Some(registration())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["role"], "CHANNEL_ADMIN");
        assert!(created.get("password").is_none());
        assert!(created.get("passwordHash").is_none());

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            Some(json!({ "email": "news@channel.example", "password": "Amber-Lighthouse-9" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["lastLoginAt"].is_string());

        let id = created["accountId"].as_str().unwrap();
        let (status, body) = send(&app, "GET", &format!("/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "news@channel.example");
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let app = app();
        send(&app, "POST", "/register", Some(registration())).await;
        let (status, body) = send(&app, "POST", "/register", Some(registration())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_bad_login_is_unauthorized() {
        let app = app();
        send(&app, "POST", "/register", Some(registration())).await;
        let (status, _) = send(
            &app,
            "POST",
            "/login",
            Some(json!({ "email": "news@channel.example", "password": "Not-The-Password-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_role_rejected() {
        let (status, _) = send(
            &app(),
            "POST",
            "/register",
            Some(json!({
                "email": "x@example.com",
                "password": "Amber-Lighthouse-9",
                "role": "MODERATOR"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
