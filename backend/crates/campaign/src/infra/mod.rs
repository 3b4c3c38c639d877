//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCampaignRepository;
pub use postgres::PgCampaignRepository;
