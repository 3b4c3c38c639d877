//! Email Value Object
//!
//! Login identifier of an account. Format check only; no delivery
//! verification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{AccountError, AccountResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length
const LOCAL_PART_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Trim, lowercase, and validate
    pub fn new(email: impl AsRef<str>) -> AccountResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(AccountError::InvalidEmail("Email cannot be empty".to_string()));
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AccountError::InvalidEmail(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(AccountError::InvalidEmail("Invalid email format".to_string()));
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH || domain.contains('@') {
            return false;
        }

        if local.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }

        // Every label non-empty and free of leading/trailing hyphens
        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = AccountError;

    fn from_str(s: &str) -> AccountResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
