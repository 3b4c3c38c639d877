//! Repository Traits
//!
//! Interfaces for campaign persistence. Implementations live in `infra`.

use kernel::id::{AccountId, CampaignId};

use crate::domain::entity::campaign::{Campaign, StatusChange};
use crate::error::CampaignResult;

/// Campaign repository trait
#[trait_variant::make(CampaignRepository: Send)]
pub trait LocalCampaignRepository {
    /// Insert a new campaign
    async fn create(&self, campaign: &Campaign) -> CampaignResult<()>;

    /// Find campaign by ID
    async fn find_by_id(&self, campaign_id: &CampaignId) -> CampaignResult<Option<Campaign>>;

    /// List campaigns, newest first, optionally only one advertiser's
    async fn list(&self, advertiser_id: Option<&AccountId>) -> CampaignResult<Vec<Campaign>>;

    /// Apply `change` only if the stored status still equals `change.from`
    ///
    /// Returns `false` when no row matched, i.e. another writer moved the
    /// campaign first or it no longer exists.
    async fn update_status(
        &self,
        campaign_id: &CampaignId,
        change: &StatusChange,
    ) -> CampaignResult<bool>;
}
