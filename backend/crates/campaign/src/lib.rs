//! Campaign Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Campaign entity, status graph, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Status lifecycle
//! A campaign starts in `DRAFT` and moves one step at a time along
//! [`CampaignStatusGraph`]. Status writes are conditional on the status
//! that was read, so a lost race surfaces as
//! [`CampaignError::ConcurrentModification`] instead of overwriting.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::{Campaign, CampaignStatus, CampaignStatusGraph, can_transition};
pub use error::{CampaignError, CampaignResult};
pub use infra::{InMemoryCampaignRepository, PgCampaignRepository};
pub use presentation::router::{campaign_router, campaign_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
