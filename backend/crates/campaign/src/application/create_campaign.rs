//! Create Campaign Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::campaign::Campaign;
use crate::domain::repository::CampaignRepository;
use crate::domain::value_object::{
    ad_text::AdText, budget::Budget, campaign_title::CampaignTitle,
};
use crate::error::CampaignResult;

pub struct CreateCampaignInput {
    pub advertiser_id: AccountId,
    pub channel_admin_id: Option<AccountId>,
    pub title: String,
    pub ad_text: String,
    /// Minor currency units
    pub budget: i64,
}

pub struct CreateCampaignUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCampaignUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCampaignInput) -> CampaignResult<Campaign> {
        let title = CampaignTitle::new(&input.title)?;
        let ad_text = AdText::new(&input.ad_text)?;
        let budget = Budget::new(input.budget)?;

        let campaign = Campaign::new(
            input.advertiser_id,
            input.channel_admin_id,
            title,
            ad_text,
            budget,
        );

        self.repo.create(&campaign).await?;

        tracing::info!(
            campaign_id = %campaign.campaign_id,
            advertiser_id = %campaign.advertiser_id,
            budget = campaign.budget.minor_units(),
            "Campaign created"
        );

        Ok(campaign)
    }
}
