//! Error conversions
//!
//! SQLSTATE-aware mapping of `sqlx` errors and the RFC 7807 rendering of
//! [`AppError`], each behind its feature.

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 23: Integrity Constraint Violation
                    Some("23505") => AppError::conflict("Duplicate key value"),
                    Some("23503") => AppError::conflict("Referenced record does not exist"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23514") => AppError::unprocessable("Check constraint violation"),
                    Some("23000" | "23001") => AppError::conflict("Integrity constraint violation"),
                    // Class 40: Transaction Rollback
                    Some("40001" | "40P01") => {
                        AppError::conflict("Concurrent update, please retry")
                    }
                    // Class 53: Insufficient Resources
                    Some("53000" | "53100" | "53200" | "53300") => {
                        AppError::service_unavailable("Database resource exhausted")
                    }
                    // Class 57: Operator Intervention
                    Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
