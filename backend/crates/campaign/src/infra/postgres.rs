//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CampaignId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::campaign::{Campaign, StatusChange};
use crate::domain::repository::CampaignRepository;
use crate::domain::value_object::{
    ad_text::AdText, budget::Budget, campaign_status::CampaignStatus,
    campaign_title::CampaignTitle,
};
use crate::error::{CampaignError, CampaignResult};

const SELECT_COLUMNS: &str = r#"
    campaign_id,
    advertiser_id,
    channel_admin_id,
    title,
    ad_text,
    budget,
    status,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed campaign repository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CampaignRepository for PgCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> CampaignResult<()> {
        sqlx::query(
            r#"
            INSERT INTO campaigns (
                campaign_id,
                advertiser_id,
                channel_admin_id,
                title,
                ad_text,
                budget,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(campaign.campaign_id.as_uuid())
        .bind(campaign.advertiser_id.as_uuid())
        .bind(campaign.channel_admin_id.map(AccountId::into_uuid))
        .bind(campaign.title.as_str())
        .bind(campaign.ad_text.as_str())
        .bind(campaign.budget.minor_units())
        .bind(campaign.status.code())
        .bind(campaign.created_at)
        .bind(campaign.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, campaign_id: &CampaignId) -> CampaignResult<Option<Campaign>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM campaigns WHERE campaign_id = $1");
        let row = sqlx::query_as::<_, CampaignRow>(&sql)
            .bind(campaign_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(CampaignRow::into_campaign).transpose()
    }

    async fn list(&self, advertiser_id: Option<&AccountId>) -> CampaignResult<Vec<Campaign>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM campaigns \
             WHERE ($1::uuid IS NULL OR advertiser_id = $1) \
             ORDER BY created_at DESC, campaign_id"
        );
        let rows = sqlx::query_as::<_, CampaignRow>(&sql)
            .bind(advertiser_id.map(|id| *id.as_uuid()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CampaignRow::into_campaign).collect()
    }

    async fn update_status(
        &self,
        campaign_id: &CampaignId,
        change: &StatusChange,
    ) -> CampaignResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE campaigns
            SET status = $3, updated_at = $4
            WHERE campaign_id = $1 AND status = $2
            "#,
        )
        .bind(campaign_id.as_uuid())
        .bind(change.from.code())
        .bind(change.to.code())
        .bind(change.at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CampaignRow {
    campaign_id: Uuid,
    advertiser_id: Uuid,
    channel_admin_id: Option<Uuid>,
    title: String,
    ad_text: String,
    budget: i64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CampaignRow {
    fn into_campaign(self) -> CampaignResult<Campaign> {
        // The CHECK constraint should make this unreachable
        let status = CampaignStatus::from_code(&self.status).ok_or_else(|| {
            CampaignError::Internal(format!("Unknown status in database: {}", self.status))
        })?;

        Ok(Campaign {
            campaign_id: CampaignId::from_uuid(self.campaign_id),
            advertiser_id: AccountId::from_uuid(self.advertiser_id),
            channel_admin_id: self.channel_admin_id.map(AccountId::from_uuid),
            title: CampaignTitle::from_db(self.title),
            ad_text: AdText::from_db(self.ad_text),
            budget: Budget::from_db(self.budget),
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
