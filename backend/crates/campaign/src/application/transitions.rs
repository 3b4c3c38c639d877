//! Allowed transitions query

use serde::Serialize;

use crate::domain::status_graph::CampaignStatusGraph;
use crate::domain::value_object::campaign_status::CampaignStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionsOutput {
    pub status: CampaignStatus,
    pub allowed: Vec<CampaignStatus>,
    pub terminal: bool,
}

pub fn describe_transitions(status: CampaignStatus) -> TransitionsOutput {
    TransitionsOutput {
        status,
        allowed: CampaignStatusGraph::successors(status).to_vec(),
        terminal: CampaignStatusGraph::is_terminal(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_paid() {
        let out = describe_transitions(CampaignStatus::Paid);
        assert_eq!(out.allowed, vec![CampaignStatus::Published]);
        assert!(!out.terminal);
    }

    #[test]
    fn test_describe_terminal() {
        let out = describe_transitions(CampaignStatus::Ready);
        assert!(out.allowed.is_empty());
        assert!(out.terminal);
    }
}
