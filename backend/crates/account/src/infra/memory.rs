//! In-memory account repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        let mut accounts = self.accounts.write().await;
        // Mirrors the unique index on accounts.email
        if accounts.values().any(|a| a.email == account.email) {
            return Err(AccountError::EmailTaken);
        }
        accounts.insert(account.account_id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        Ok(self.accounts.read().await.get(account_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        Ok(self.accounts.read().await.values().any(|a| &a.email == email))
    }

    async fn record_failure(
        &self,
        account_id: &AccountId,
        at: DateTime<Utc>,
    ) -> AccountResult<Account> {
        // Read and write under one guard, like the single UPDATE in Postgres
        let mut accounts = self.accounts.write().await;
        let stored = accounts.get_mut(account_id).ok_or(AccountError::NotFound)?;
        stored.record_failure_at(at);
        Ok(stored.clone())
    }

    async fn record_login(
        &self,
        account_id: &AccountId,
        at: DateTime<Utc>,
    ) -> AccountResult<Option<Account>> {
        let mut accounts = self.accounts.write().await;
        let Some(stored) = accounts.get_mut(account_id) else {
            return Ok(None);
        };
        if stored.is_locked_at(at) {
            return Ok(None);
        }
        stored.record_login_at(at);
        Ok(Some(stored.clone()))
    }
}
