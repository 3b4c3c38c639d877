//! Campaign Status Value Object
//!
//! The eight lifecycle states of a campaign. The string code of each variant
//! is the value stored in the `campaigns.status` column and exchanged over the
//! JSON API, so codes must never be renamed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::status_graph::CampaignStatusGraph;

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Being edited by the advertiser
    #[default]
    Draft,
    /// Submitted and awaiting payment
    ReadyForPayment,
    /// Payment received
    Paid,
    /// Defined but unused by the transition table
    Ready,
    /// Live in the channel
    Published,
    /// Under dispute
    Disputed,
    /// Finished successfully
    Completed,
    /// Money returned to the advertiser
    Refunded,
}

impl CampaignStatus {
    /// Every status, in lifecycle order
    pub const ALL: [CampaignStatus; 8] = [
        Self::Draft,
        Self::ReadyForPayment,
        Self::Paid,
        Self::Ready,
        Self::Published,
        Self::Disputed,
        Self::Completed,
        Self::Refunded,
    ];

    /// String code for storage and the API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::ReadyForPayment => "READY_FOR_PAYMENT",
            Self::Paid => "PAID",
            Self::Ready => "READY",
            Self::Published => "PUBLISHED",
            Self::Disputed => "DISPUTED",
            Self::Completed => "COMPLETED",
            Self::Refunded => "REFUNDED",
        }
    }

    /// Parse a string code. Codes are case-sensitive.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Whether a single-step move to `target` is allowed
    #[inline]
    pub fn can_transition_to(self, target: CampaignStatus) -> bool {
        CampaignStatusGraph::can_transition(self, target)
    }

    /// Statuses reachable in one step
    #[inline]
    pub fn successors(self) -> &'static [CampaignStatus] {
        CampaignStatusGraph::successors(self)
    }

    /// No outgoing transitions
    #[inline]
    pub fn is_terminal(self) -> bool {
        CampaignStatusGraph::is_terminal(self)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A status code outside the eight known values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown campaign status: {0}")]
pub struct UnknownCampaignStatus(pub String);

impl FromStr for CampaignStatus {
    type Err = UnknownCampaignStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownCampaignStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_status() {
        for status in CampaignStatus::ALL {
            assert_eq!(CampaignStatus::from_code(status.code()), Some(status));
            assert_eq!(status.to_string(), status.code());
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(CampaignStatus::Draft.code(), "DRAFT");
        assert_eq!(CampaignStatus::ReadyForPayment.code(), "READY_FOR_PAYMENT");
        assert_eq!(CampaignStatus::Refunded.code(), "REFUNDED");
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert_eq!(CampaignStatus::from_code("draft"), None);
        assert_eq!(CampaignStatus::from_code("ARCHIVED"), None);
        assert_eq!(CampaignStatus::from_code(""), None);

        let err = "CANCELLED".parse::<CampaignStatus>().unwrap_err();
        assert_eq!(err, UnknownCampaignStatus("CANCELLED".to_string()));
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&CampaignStatus::ReadyForPayment).unwrap();
        assert_eq!(json, "\"READY_FOR_PAYMENT\"");

        let status: CampaignStatus = serde_json::from_str("\"PUBLISHED\"").unwrap();
        assert_eq!(status, CampaignStatus::Published);

        assert!(serde_json::from_str::<CampaignStatus>("\"LIVE\"").is_err());
    }

    #[test]
    fn test_default_is_draft() {
        assert_eq!(CampaignStatus::default(), CampaignStatus::Draft);
    }
}
