//! Campaign Entity
//!
//! An advertiser's request to place an ad in a channel. The status field
//! only moves along edges of [`CampaignStatusGraph`].

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CampaignId};

use crate::domain::status_graph::CampaignStatusGraph;
use crate::domain::value_object::{
    ad_text::AdText, budget::Budget, campaign_status::CampaignStatus,
    campaign_title::CampaignTitle,
};
use crate::error::{CampaignError, CampaignResult};

#[derive(Debug, Clone)]
pub struct Campaign {
    pub campaign_id: CampaignId,
    /// Owner of the campaign
    pub advertiser_id: AccountId,
    /// Channel admin the ad is offered to, if already chosen
    pub channel_admin_id: Option<AccountId>,
    pub title: CampaignTitle,
    pub ad_text: AdText,
    pub budget: Budget,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An accepted status move, as handed to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: CampaignStatus,
    pub to: CampaignStatus,
    pub at: DateTime<Utc>,
}

impl Campaign {
    /// Create a new campaign in `DRAFT`
    pub fn new(
        advertiser_id: AccountId,
        channel_admin_id: Option<AccountId>,
        title: CampaignTitle,
        ad_text: AdText,
        budget: Budget,
    ) -> Self {
        let now = Utc::now();
        Self {
            campaign_id: CampaignId::new(),
            advertiser_id,
            channel_admin_id,
            title,
            ad_text,
            budget,
            status: CampaignStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to `target` if the graph allows it
    ///
    /// On rejection the entity is left untouched.
    pub fn transition_to(&mut self, target: CampaignStatus) -> CampaignResult<StatusChange> {
        if !CampaignStatusGraph::can_transition(self.status, target) {
            return Err(CampaignError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }

        let change = StatusChange {
            from: self.status,
            to: target,
            at: Utc::now(),
        };
        self.status = target;
        self.updated_at = change.at;
        Ok(change)
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Campaign {
        Campaign::new(
            AccountId::new(),
            None,
            CampaignTitle::new("Launch week").unwrap(),
            AdText::new("Try our new app").unwrap(),
            Budget::new(50_000).unwrap(),
        )
    }

    #[test]
    fn test_new_campaign_is_draft() {
        let campaign = draft();
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.created_at, campaign.updated_at);
        assert!(!campaign.is_terminal());
    }

    #[test]
    fn test_walk_happy_path() {
        let mut campaign = draft();
        for target in [
            CampaignStatus::ReadyForPayment,
            CampaignStatus::Paid,
            CampaignStatus::Published,
            CampaignStatus::Completed,
        ] {
            let before = campaign.status;
            let change = campaign.transition_to(target).unwrap();
            assert_eq!(change.from, before);
            assert_eq!(change.to, target);
            assert_eq!(campaign.updated_at, change.at);
        }
        assert!(campaign.is_terminal());
    }

    #[test]
    fn test_rejected_transition_leaves_entity_unchanged() {
        let mut campaign = draft();
        let updated_at = campaign.updated_at;

        let err = campaign.transition_to(CampaignStatus::Paid).unwrap_err();
        assert!(matches!(
            err,
            CampaignError::InvalidTransition {
                from: CampaignStatus::Draft,
                to: CampaignStatus::Paid
            }
        ));
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.updated_at, updated_at);
    }

    #[test]
    fn test_self_transition_rejected() {
        let mut campaign = draft();
        assert!(campaign.transition_to(CampaignStatus::Draft).is_err());
    }
}
