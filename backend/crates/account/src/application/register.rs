//! Register Use Case
//!
//! Creates a new advertiser or channel admin account.

use std::sync::Arc;

use crate::application::AccountSummary;
use crate::application::config::AccountConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    account_role::AccountRole,
    email::Email,
};
use crate::error::{AccountError, AccountResult};

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub role: AccountRole,
}

pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<AccountSummary> {
        let email = Email::new(&input.email)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())?;

        let account = Account::new(email, input.role, password_hash);
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Account registered"
        );

        Ok(AccountSummary::from(&account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAccountRepository;

    fn use_case() -> (Arc<InMemoryAccountRepository>, RegisterUseCase<InMemoryAccountRepository>) {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = RegisterUseCase::new(repo.clone(), Arc::new(AccountConfig::development()));
        (repo, use_case)
    }

    fn input(email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
            role: AccountRole::ChannelAdmin,
        }
    }

    #[tokio::test]
    async fn test_register_normalizes_email() {
        let (repo, use_case) = use_case();
        let summary = use_case
            .execute(input("Owner@Channel.IO", "Quiet-River-2048"))
            .await
            .unwrap();
        assert_eq!(summary.email, "owner@channel.io");
        assert_eq!(summary.role, AccountRole::ChannelAdmin);

        let stored = repo.find_by_id(&summary.account_id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash.as_phc_string(), "Quiet-River-2048");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (_, use_case) = use_case();
        use_case
            .execute(input("owner@channel.io", "Quiet-River-2048"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("OWNER@channel.io", "Other-Valley-4096"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::EmailTaken));
    }

    #[tokio::test]
    async fn test_weak_password_rejected() {
        let (_, use_case) = use_case();
        let err = use_case
            .execute(input("owner@channel.io", "password123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::PasswordPolicy(_)));

        let err = use_case.execute(input("nope", "Quiet-River-2048")).await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidEmail(_)));
    }
}
