//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::id::{AccountId, CampaignId};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    ChangeStatusInput, ChangeStatusUseCase, CreateCampaignInput, CreateCampaignUseCase,
    GetCampaignUseCase, ListCampaignsUseCase, TransitionsOutput, describe_transitions,
};
use crate::domain::repository::CampaignRepository;
use crate::domain::value_object::campaign_status::CampaignStatus;
use crate::error::CampaignResult;
use crate::presentation::dto::{
    CampaignResponse, ChangeStatusRequest, CreateCampaignRequest, ListCampaignsQuery,
};

/// Shared state for campaign handlers
#[derive(Clone)]
pub struct CampaignAppState<R>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/campaigns
pub async fn create_campaign<R>(
    State(state): State<CampaignAppState<R>>,
    Json(req): Json<CreateCampaignRequest>,
) -> CampaignResult<(StatusCode, Json<CampaignResponse>)>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCampaignUseCase::new(state.repo.clone());

    let input = CreateCampaignInput {
        advertiser_id: AccountId::from_uuid(req.advertiser_id),
        channel_admin_id: req.channel_admin_id.map(AccountId::from_uuid),
        title: req.title,
        ad_text: req.ad_text,
        budget: req.budget,
    };

    let campaign = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(campaign.into())))
}

/// GET /api/campaigns?advertiserId=
pub async fn list_campaigns<R>(
    State(state): State<CampaignAppState<R>>,
    Query(query): Query<ListCampaignsQuery>,
) -> CampaignResult<Json<Vec<CampaignResponse>>>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let advertiser_id = query.advertiser_id.map(AccountId::from_uuid);
    let campaigns = ListCampaignsUseCase::new(state.repo.clone())
        .execute(advertiser_id.as_ref())
        .await?;

    Ok(Json(campaigns.into_iter().map(Into::into).collect()))
}

/// GET /api/campaigns/{id}
pub async fn get_campaign<R>(
    State(state): State<CampaignAppState<R>>,
    Path(id): Path<Uuid>,
) -> CampaignResult<Json<CampaignResponse>>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let campaign = GetCampaignUseCase::new(state.repo.clone())
        .execute(&CampaignId::from_uuid(id))
        .await?;

    Ok(Json(campaign.into()))
}

/// POST /api/campaigns/{id}/status
pub async fn change_status<R>(
    State(state): State<CampaignAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> CampaignResult<Json<CampaignResponse>>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let target: CampaignStatus = req.status.parse()?;

    let campaign = ChangeStatusUseCase::new(state.repo.clone())
        .execute(ChangeStatusInput {
            campaign_id: CampaignId::from_uuid(id),
            target,
        })
        .await?;

    Ok(Json(campaign.into()))
}

/// GET /api/campaigns/statuses/{status}/transitions
pub async fn status_transitions(Path(status): Path<String>) -> CampaignResult<Json<TransitionsOutput>> {
    let status: CampaignStatus = status.parse()?;
    Ok(Json(describe_transitions(status)))
}
