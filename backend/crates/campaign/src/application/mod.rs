//! Application Layer
//!
//! Campaign use cases.

pub mod change_status;
pub mod create_campaign;
pub mod get_campaign;
pub mod transitions;

// Re-exports
pub use change_status::{ChangeStatusInput, ChangeStatusUseCase};
pub use create_campaign::{CreateCampaignInput, CreateCampaignUseCase};
pub use get_campaign::{GetCampaignUseCase, ListCampaignsUseCase};
pub use transitions::{TransitionsOutput, describe_transitions};
