//! Campaign read use cases

use std::sync::Arc;

use kernel::id::{AccountId, CampaignId};

use crate::domain::entity::campaign::Campaign;
use crate::domain::repository::CampaignRepository;
use crate::error::{CampaignError, CampaignResult};

pub struct GetCampaignUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> GetCampaignUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, campaign_id: &CampaignId) -> CampaignResult<Campaign> {
        self.repo
            .find_by_id(campaign_id)
            .await?
            .ok_or(CampaignError::NotFound)
    }
}

/// Newest first
pub struct ListCampaignsUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> ListCampaignsUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, advertiser_id: Option<&AccountId>) -> CampaignResult<Vec<Campaign>> {
        self.repo.list(advertiser_id).await
    }
}
