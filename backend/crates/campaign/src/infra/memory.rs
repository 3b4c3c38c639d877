//! In-memory campaign repository
//!
//! Backs tests and database-less local runs. The write lock makes the
//! status check and the write in `update_status` one atomic step, matching
//! the conditional `UPDATE` of the Postgres implementation.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{AccountId, CampaignId};
use tokio::sync::RwLock;

use crate::domain::entity::campaign::{Campaign, StatusChange};
use crate::domain::repository::CampaignRepository;
use crate::error::{CampaignError, CampaignResult};

#[derive(Clone, Default)]
pub struct InMemoryCampaignRepository {
    campaigns: Arc<RwLock<HashMap<CampaignId, Campaign>>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CampaignRepository for InMemoryCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> CampaignResult<()> {
        let mut campaigns = self.campaigns.write().await;
        if campaigns.contains_key(&campaign.campaign_id) {
            return Err(CampaignError::Internal(format!(
                "duplicate campaign id {}",
                campaign.campaign_id
            )));
        }
        campaigns.insert(campaign.campaign_id, campaign.clone());
        Ok(())
    }

    async fn find_by_id(&self, campaign_id: &CampaignId) -> CampaignResult<Option<Campaign>> {
        Ok(self.campaigns.read().await.get(campaign_id).cloned())
    }

    async fn list(&self, advertiser_id: Option<&AccountId>) -> CampaignResult<Vec<Campaign>> {
        let campaigns = self.campaigns.read().await;
        let mut found: Vec<Campaign> = campaigns
            .values()
            .filter(|c| advertiser_id.is_none_or(|id| c.advertiser_id == *id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn update_status(
        &self,
        campaign_id: &CampaignId,
        change: &StatusChange,
    ) -> CampaignResult<bool> {
        let mut campaigns = self.campaigns.write().await;
        match campaigns.get_mut(campaign_id) {
            Some(stored) if stored.status == change.from => {
                stored.status = change.to;
                stored.updated_at = change.at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
