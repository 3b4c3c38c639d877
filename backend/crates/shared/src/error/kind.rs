//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps every application error onto an
//! HTTP status code.

use serde::Serialize;

/// Error classification
///
/// Each variant corresponds to one HTTP status code (RFC 9110).
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - malformed request
    BadRequest,
    /// 401 - missing or wrong credentials
    Unauthorized,
    /// 404 - resource does not exist
    NotFound,
    /// 409 - request conflicts with the current resource state
    Conflict,
    /// 422 - well-formed request with invalid content
    UnprocessableEntity,
    /// 423 - resource (account) is locked
    Locked,
    /// 500 - unexpected server failure
    InternalServerError,
    /// 503 - dependency (database) unavailable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Conflict.status_code(), 409);
    /// assert_eq!(ErrorKind::Locked.status_code(), 423);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::Locked => 423,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase for the status code
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::Locked => "Locked",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
