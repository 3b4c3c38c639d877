//! Application Layer
//!
//! Account use cases.

pub mod config;
pub mod get_account;
pub mod login;
pub mod register;

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::entity::account::Account;
use crate::domain::value_object::account_role::AccountRole;

// Re-exports
pub use config::AccountConfig;
pub use get_account::GetAccountUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};

/// Public view of an account; never carries credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub account_id: AccountId,
    pub email: String,
    pub role: AccountRole,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id,
            email: account.email.as_str().to_string(),
            role: account.role,
            last_login_at: account.last_login_at,
            created_at: account.created_at,
        }
    }
}
