//! Ad Text Value Object
//!
//! The creative posted to the channel. Line breaks are allowed; other
//! control characters are not.

use crate::error::{CampaignError, CampaignResult};

/// Maximum ad text length (in characters)
pub const AD_TEXT_MAX_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdText(String);

impl AdText {
    pub fn new(text: impl AsRef<str>) -> CampaignResult<Self> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(CampaignError::Validation("Ad text cannot be empty".to_string()));
        }

        let len = text.chars().count();
        if len > AD_TEXT_MAX_LENGTH {
            return Err(CampaignError::Validation(format!(
                "Ad text must be at most {} characters (got {})",
                AD_TEXT_MAX_LENGTH, len
            )));
        }

        if text
            .chars()
            .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
        {
            return Err(CampaignError::Validation(
                "Ad text contains control characters".to_string(),
            ));
        }

        Ok(Self(text.to_string()))
    }

    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_text_multiline() {
        let text = AdText::new("Big sale!\nOnly this week.").unwrap();
        assert_eq!(text.as_str(), "Big sale!\nOnly this week.");
    }

    #[test]
    fn test_ad_text_invalid() {
        assert!(AdText::new("").is_err());
        assert!(AdText::new("\n\n").is_err());
        assert!(AdText::new("bell\u{0007}").is_err());
        assert!(AdText::new("a".repeat(AD_TEXT_MAX_LENGTH + 1)).is_err());
        assert!(AdText::new("a".repeat(AD_TEXT_MAX_LENGTH)).is_ok());
    }
}
