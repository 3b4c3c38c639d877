//! Change Status Use Case
//!
//! Moves a campaign one step along the status graph. The write is
//! conditional on the status that was read, so two concurrent requests
//! starting from the same status cannot both succeed.

use std::sync::Arc;

use kernel::id::CampaignId;

use crate::domain::entity::campaign::Campaign;
use crate::domain::repository::CampaignRepository;
use crate::domain::value_object::campaign_status::CampaignStatus;
use crate::error::{CampaignError, CampaignResult};

pub struct ChangeStatusInput {
    pub campaign_id: CampaignId,
    pub target: CampaignStatus,
}

pub struct ChangeStatusUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> ChangeStatusUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ChangeStatusInput) -> CampaignResult<Campaign> {
        let mut campaign = self
            .repo
            .find_by_id(&input.campaign_id)
            .await?
            .ok_or(CampaignError::NotFound)?;

        // Rejected here means nothing is written
        let change = campaign.transition_to(input.target)?;

        if !self.repo.update_status(&campaign.campaign_id, &change).await? {
            return Err(CampaignError::ConcurrentModification);
        }

        tracing::info!(
            campaign_id = %campaign.campaign_id,
            from = %change.from,
            to = %change.to,
            "Campaign status changed"
        );

        Ok(campaign)
    }
}
