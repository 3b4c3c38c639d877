//! Campaign Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::CampaignRepository;
use crate::infra::postgres::PgCampaignRepository;
use crate::presentation::handlers::{self, CampaignAppState};

/// Create the Campaign router with PostgreSQL repository
pub fn campaign_router(repo: PgCampaignRepository) -> Router {
    campaign_router_generic(repo)
}

/// Create a Campaign router for any repository implementation
pub fn campaign_router_generic<R>(repo: R) -> Router
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let state = CampaignAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_campaign::<R>).get(handlers::list_campaigns::<R>),
        )
        .route("/{id}", get(handlers::get_campaign::<R>))
        .route("/{id}/status", post(handlers::change_status::<R>))
        .route(
            "/statuses/{status}/transitions",
            get(handlers::status_transitions),
        )
        .with_state(state)
}
