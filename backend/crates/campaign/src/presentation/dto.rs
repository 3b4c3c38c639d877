//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::campaign::Campaign;
use crate::domain::value_object::campaign_status::CampaignStatus;

// ============================================================================
// Create
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub advertiser_id: Uuid,
    #[serde(default)]
    pub channel_admin_id: Option<Uuid>,
    pub title: String,
    pub ad_text: String,
    /// Minor currency units
    pub budget: i64,
}

// ============================================================================
// Read
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub campaign_id: Uuid,
    pub advertiser_id: Uuid,
    pub channel_admin_id: Option<Uuid>,
    pub title: String,
    pub ad_text: String,
    pub budget: i64,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            campaign_id: campaign.campaign_id.into_uuid(),
            advertiser_id: campaign.advertiser_id.into_uuid(),
            channel_admin_id: campaign.channel_admin_id.map(|id| id.into_uuid()),
            title: campaign.title.as_str().to_string(),
            ad_text: campaign.ad_text.as_str().to_string(),
            budget: campaign.budget.minor_units(),
            status: campaign.status,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCampaignsQuery {
    pub advertiser_id: Option<Uuid>,
}

// ============================================================================
// Status
// ============================================================================

/// Status change request
///
/// `status` stays a plain string so unknown codes surface as a domain
/// error (422) rather than a JSON rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    pub status: String,
}
