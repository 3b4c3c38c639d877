//! Repository Traits
//!
//! Interfaces for account persistence. Implementations live in `infra`.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account
    async fn create(&self, account: &Account) -> AccountResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>>;

    /// Find account by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Count one failed login as a single atomic step
    ///
    /// Applies [`Account::record_failure_at`] to the stored row and returns
    /// the result, so parallel failures never overwrite each other.
    async fn record_failure(
        &self,
        account_id: &AccountId,
        at: DateTime<Utc>,
    ) -> AccountResult<Account>;

    /// Clear failures and stamp `last_login_at`, unless a lock is active at `at`
    ///
    /// Returns `None` when no account qualified, i.e. it was locked in the
    /// meantime or no longer exists.
    async fn record_login(
        &self,
        account_id: &AccountId,
        at: DateTime<Utc>,
    ) -> AccountResult<Option<Account>>;
}
