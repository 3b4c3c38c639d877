//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Account not found")]
    NotFound,

    #[error("Email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is temporarily locked")]
    AccountLocked,

    #[error("{0}")]
    InvalidEmail(String),

    #[error(transparent)]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::NotFound => StatusCode::NOT_FOUND,
            AccountError::EmailTaken => StatusCode::CONFLICT,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::AccountLocked => StatusCode::LOCKED,
            AccountError::InvalidEmail(_) | AccountError::PasswordPolicy(_) => {
                StatusCode::BAD_REQUEST
            }
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::NotFound => ErrorKind::NotFound,
            AccountError::EmailTaken => ErrorKind::Conflict,
            AccountError::InvalidCredentials => ErrorKind::Unauthorized,
            AccountError::AccountLocked => ErrorKind::Locked,
            AccountError::InvalidEmail(_) | AccountError::PasswordPolicy(_) => {
                ErrorKind::BadRequest
            }
            AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccountError::EmailTaken => err.with_action("Sign in instead, or use another email"),
            AccountError::AccountLocked => err.with_action(format!(
                "Try again in {} minutes",
                crate::domain::Account::LOCKOUT_MINUTES
            )),
            AccountError::PasswordPolicy(policy) => err.with_action(match policy {
                PasswordPolicyError::TooShort { .. } => "Please choose a longer password",
                PasswordPolicyError::TooLong { .. } => "Please choose a shorter password",
                PasswordPolicyError::EmptyOrWhitespace => "Please enter a password",
                PasswordPolicyError::InvalidCharacter => {
                    "Please remove any special control characters"
                }
                PasswordPolicyError::CommonPattern => "Please choose a more unique password",
            }),
            AccountError::Database(_) => AppError::internal("Database error"),
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::AccountLocked => {
                tracing::warn!("Login attempt on locked account");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            // Unique violation on email races past exists_by_email -> 409
            AccountError::Database(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}
