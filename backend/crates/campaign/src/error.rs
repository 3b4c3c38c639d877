//! Campaign Error Types
//!
//! Campaign-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::campaign_status::{CampaignStatus, UnknownCampaignStatus};

/// Campaign-specific result type alias
pub type CampaignResult<T> = Result<T, CampaignError>;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("Campaign not found")]
    NotFound,

    /// The graph has no edge `from → to`
    #[error("Cannot change campaign status from {from} to {to}")]
    InvalidTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },

    /// Conditional update matched no row
    #[error("Campaign status was changed concurrently")]
    ConcurrentModification,

    #[error("Unknown campaign status: {0}")]
    UnknownStatus(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampaignError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CampaignError::NotFound => StatusCode::NOT_FOUND,
            CampaignError::InvalidTransition { .. } | CampaignError::ConcurrentModification => {
                StatusCode::CONFLICT
            }
            CampaignError::UnknownStatus(_) | CampaignError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CampaignError::Database(_) | CampaignError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CampaignError::NotFound => ErrorKind::NotFound,
            CampaignError::InvalidTransition { .. } | CampaignError::ConcurrentModification => {
                ErrorKind::Conflict
            }
            CampaignError::UnknownStatus(_) | CampaignError::Validation(_) => {
                ErrorKind::UnprocessableEntity
            }
            CampaignError::Database(_) | CampaignError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CampaignError::InvalidTransition { from, .. } => {
                let allowed = from.successors();
                let action = if allowed.is_empty() {
                    format!("{from} is terminal; no further status changes are possible")
                } else {
                    let codes: Vec<&str> = allowed.iter().map(|s| s.code()).collect();
                    format!("Allowed next status: {}", codes.join(", "))
                };
                AppError::new(self.kind(), self.to_string()).with_action(action)
            }
            CampaignError::ConcurrentModification => AppError::new(self.kind(), self.to_string())
                .with_action("Reload the campaign and retry"),
            CampaignError::Database(_) => AppError::internal("Database error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CampaignError::Database(e) => {
                tracing::error!(error = %e, "Campaign database error");
            }
            CampaignError::Internal(msg) => {
                tracing::error!(message = %msg, "Campaign internal error");
            }
            CampaignError::InvalidTransition { from, to } => {
                tracing::warn!(from = %from, to = %to, "Rejected campaign status transition");
            }
            CampaignError::ConcurrentModification => {
                tracing::warn!("Concurrent campaign status update lost");
            }
            _ => {
                tracing::debug!(error = %self, "Campaign error");
            }
        }
    }
}

impl IntoResponse for CampaignError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<UnknownCampaignStatus> for CampaignError {
    fn from(err: UnknownCampaignStatus) -> Self {
        CampaignError::UnknownStatus(err.0)
    }
}

impl From<CampaignError> for AppError {
    fn from(err: CampaignError) -> Self {
        match err {
            // SQLSTATE-aware mapping (FK violation -> 409, pool timeout -> 503, ...)
            CampaignError::Database(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CampaignError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CampaignError::ConcurrentModification.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CampaignError::UnknownStatus("LIVE".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CampaignError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_transition_lists_allowed_statuses() {
        let err = CampaignError::InvalidTransition {
            from: CampaignStatus::Draft,
            to: CampaignStatus::Paid,
        };
        let app_err = AppError::from(err);
        assert_eq!(app_err.kind(), ErrorKind::Conflict);
        assert_eq!(app_err.action(), Some("Allowed next status: READY_FOR_PAYMENT"));
    }

    #[test]
    fn test_invalid_transition_from_terminal() {
        let err = CampaignError::InvalidTransition {
            from: CampaignStatus::Completed,
            to: CampaignStatus::Draft,
        };
        let app_err = err.to_app_error();
        assert!(app_err.action().unwrap().contains("terminal"));
    }

    #[test]
    fn test_pool_timeout_maps_to_unavailable() {
        let app_err = AppError::from(CampaignError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_unknown_status_conversion() {
        let err: CampaignError = UnknownCampaignStatus("LIVE".into()).into();
        assert!(matches!(err, CampaignError::UnknownStatus(code) if code == "LIVE"));
    }
}
