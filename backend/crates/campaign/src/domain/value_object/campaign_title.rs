//! Campaign Title Value Object

use std::fmt;

use crate::error::{CampaignError, CampaignResult};

/// Maximum title length (in characters)
pub const TITLE_MAX_LENGTH: usize = 120;

/// Human-readable campaign title
///
/// Trimmed; 1 to [`TITLE_MAX_LENGTH`] characters; no control characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignTitle(String);

impl CampaignTitle {
    pub fn new(title: impl AsRef<str>) -> CampaignResult<Self> {
        let title = title.as_ref().trim();

        if title.is_empty() {
            return Err(CampaignError::Validation("Title cannot be empty".to_string()));
        }

        let len = title.chars().count();
        if len > TITLE_MAX_LENGTH {
            return Err(CampaignError::Validation(format!(
                "Title must be at most {} characters (got {})",
                TITLE_MAX_LENGTH, len
            )));
        }

        if title.chars().any(char::is_control) {
            return Err(CampaignError::Validation(
                "Title contains control characters".to_string(),
            ));
        }

        Ok(Self(title.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
