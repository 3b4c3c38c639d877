//! Budget Value Object
//!
//! Amount the advertiser pays for the placement, in minor currency units
//! (cents). Stored as `BIGINT`.

use std::fmt;

use crate::error::{CampaignError, CampaignResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Budget(i64);

impl Budget {
    /// Upper bound, 10^12 minor units
    pub const MAX: i64 = 1_000_000_000_000;

    pub fn new(minor_units: i64) -> CampaignResult<Self> {
        if minor_units <= 0 {
            return Err(CampaignError::Validation(
                "Budget must be greater than zero".to_string(),
            ));
        }
        if minor_units > Self::MAX {
            return Err(CampaignError::Validation(format!(
                "Budget must be at most {}",
                Self::MAX
            )));
        }
        Ok(Self(minor_units))
    }

    pub fn from_db(minor_units: i64) -> Self {
        Self(minor_units)
    }

    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
