//! Get Account Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::AccountSummary;
use crate::domain::repository::AccountRepository;
use crate::error::{AccountError, AccountResult};

pub struct GetAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> GetAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, account_id: &AccountId) -> AccountResult<AccountSummary> {
        self.repo
            .find_by_id(account_id)
            .await?
            .map(|account| AccountSummary::from(&account))
            .ok_or(AccountError::NotFound)
    }
}
