//! Domain Layer
//!
//! Contains the campaign entity, its value objects, the status transition
//! policy and the repository trait.

pub mod entity;
pub mod repository;
pub mod status_graph;
pub mod value_object;

// Re-exports
pub use entity::campaign::{Campaign, StatusChange};
pub use repository::CampaignRepository;
pub use status_graph::{CampaignStatusGraph, can_transition};
pub use value_object::campaign_status::CampaignStatus;
