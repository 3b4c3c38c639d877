//! Campaign Status Graph
//!
//! The fixed policy table of allowed single-step status transitions.
//!
//! ```text
//! DRAFT ──▶ READY_FOR_PAYMENT ──▶ PAID ──▶ PUBLISHED ──▶ COMPLETED
//!
//! READY, DISPUTED, COMPLETED, REFUNDED: no outgoing transitions
//! ```
//!
//! The table is a compile-time constant: `successors` is an exhaustive
//! `match`, so a new status cannot be added without giving it an entry.
//! It is read-only and safe to query from any number of tasks at once.
//!
//! `READY` is never a target and `PUBLISHED → DISPUTED` is not an edge.
//! Both are kept exactly as listed; do not add edges here to make a
//! business flow work without changing the policy itself.

use crate::domain::value_object::campaign_status::CampaignStatus;

/// Stateless query over the transition table
#[derive(Debug, Clone, Copy, Default)]
pub struct CampaignStatusGraph;

impl CampaignStatusGraph {
    /// Statuses directly reachable from `from`
    pub const fn successors(from: CampaignStatus) -> &'static [CampaignStatus] {
        use CampaignStatus::*;
        match from {
            Draft => &[ReadyForPayment],
            ReadyForPayment => &[Paid],
            Paid => &[Published],
            Ready => &[],
            Published => &[Completed],
            Disputed => &[],
            Completed => &[],
            Refunded => &[],
        }
    }

    /// `true` iff `to` is a direct successor of `from`
    ///
    /// Single step only; `DRAFT → PAID` is `false` even though `PAID` is
    /// reachable through `READY_FOR_PAYMENT`.
    pub fn can_transition(from: CampaignStatus, to: CampaignStatus) -> bool {
        Self::successors(from).contains(&to)
    }

    /// No outgoing transitions
    pub const fn is_terminal(status: CampaignStatus) -> bool {
        Self::successors(status).is_empty()
    }
}

/// Shorthand for [`CampaignStatusGraph::can_transition`]
#[inline]
pub fn can_transition(from: CampaignStatus, to: CampaignStatus) -> bool {
    CampaignStatusGraph::can_transition(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CampaignStatus::*;

    #[test]
    fn test_forward_edges() {
        assert!(can_transition(Draft, ReadyForPayment));
        assert!(can_transition(ReadyForPayment, Paid));
        assert!(can_transition(Paid, Published));
        assert!(can_transition(Published, Completed));
    }

    #[test]
    fn test_no_multi_hop() {
        assert!(!can_transition(Draft, Paid));
        assert!(!can_transition(Draft, Published));
        assert!(!can_transition(ReadyForPayment, Published));
        assert!(!can_transition(Paid, Completed));
    }

    #[test]
    fn test_no_backward_edges() {
        assert!(!can_transition(Paid, Draft));
        assert!(!can_transition(Published, Paid));
        assert!(!can_transition(ReadyForPayment, Draft));
    }

    #[test]
    fn test_published_cannot_be_disputed() {
        assert!(!can_transition(Published, Disputed));
    }

    #[test]
    fn test_no_self_loops() {
        for status in CampaignStatus::ALL {
            assert!(!can_transition(status, status), "{status} -> {status}");
        }
    }

    #[test]
    fn test_terminal_statuses_reject_everything() {
        for from in [Ready, Disputed, Completed, Refunded] {
            assert!(CampaignStatusGraph::is_terminal(from));
            for to in CampaignStatus::ALL {
                assert!(!can_transition(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_exact_edge_set() {
        let edges: Vec<(CampaignStatus, CampaignStatus)> = CampaignStatus::ALL
            .into_iter()
            .flat_map(|from| {
                CampaignStatus::ALL
                    .into_iter()
                    .filter(move |&to| can_transition(from, to))
                    .map(move |to| (from, to))
            })
            .collect();

        assert_eq!(
            edges,
            vec![
                (Draft, ReadyForPayment),
                (ReadyForPayment, Paid),
                (Paid, Published),
                (Published, Completed),
            ]
        );
    }

    #[test]
    fn test_ready_is_never_a_target() {
        for from in CampaignStatus::ALL {
            assert!(!can_transition(from, Ready));
        }
    }

    #[test]
    fn test_non_terminal_statuses() {
        for status in [Draft, ReadyForPayment, Paid, Published] {
            assert!(!CampaignStatusGraph::is_terminal(status));
            assert_eq!(CampaignStatusGraph::successors(status).len(), 1);
        }
    }

    #[test]
    fn test_repeated_queries_agree() {
        for from in CampaignStatus::ALL {
            for to in CampaignStatus::ALL {
                let first = can_transition(from, to);
                for _ in 0..3 {
                    assert_eq!(can_transition(from, to), first);
                }
            }
        }
    }

    #[test]
    fn test_status_shorthands_match_graph() {
        assert!(Draft.can_transition_to(ReadyForPayment));
        assert_eq!(Paid.successors(), &[Published]);
        assert!(Refunded.is_terminal());
    }
}
