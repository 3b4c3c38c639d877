//! Account Role
//!
//! Which side of the marketplace an account is on. Stored as its code.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRole {
    /// Buys ad placements
    Advertiser,
    /// Owns a channel and sells placements
    ChannelAdmin,
}

impl AccountRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AccountRole::Advertiser => "ADVERTISER",
            AccountRole::ChannelAdmin => "CHANNEL_ADMIN",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADVERTISER" => Some(AccountRole::Advertiser),
            "CHANNEL_ADMIN" => Some(AccountRole::ChannelAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
