//! Login Use Case
//!
//! Verifies credentials and maintains lockout state. Issues no session.

use std::sync::Arc;

use chrono::Utc;

use crate::application::AccountSummary;
use crate::application::config::AccountConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AccountError, AccountResult};

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<AccountSummary> {
        let email = Email::new(&input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if account.is_locked() {
            return Err(AccountError::AccountLocked);
        }

        // A password that fails today's policy cannot match; count it as a miss
        let password_valid = match RawPassword::new(input.password) {
            Ok(raw) => account.password_hash.verify(&raw, self.config.pepper()),
            Err(_) => false,
        };

        if !password_valid {
            let account = self
                .repo
                .record_failure(&account.account_id, Utc::now())
                .await?;

            if account.login_failed_count >= Account::MAX_LOGIN_FAILURES {
                tracing::warn!(
                    account_id = %account.account_id,
                    locked_until = ?account.locked_until,
                    "Account locked after repeated failures"
                );
            }
            return Err(AccountError::InvalidCredentials);
        }

        // Failures counted while the password was being verified may have
        // locked the account; in that case the login does not go through
        let account = self
            .repo
            .record_login(&account.account_id, Utc::now())
            .await?
            .ok_or(AccountError::AccountLocked)?;

        tracing::info!(account_id = %account.account_id, "Account logged in");

        Ok(AccountSummary::from(&account))
    }
}
