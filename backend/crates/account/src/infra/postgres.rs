//! PostgreSQL Repository Implementation

use chrono::{DateTime, Duration, Utc};
use kernel::id::AccountId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::AccountPassword, account_role::AccountRole, email::Email,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                role,
                password_hash,
                login_failed_count,
                locked_until,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.role.code())
        .bind(account.password_hash.as_phc_string())
        .bind(failed_count_to_db(account.login_failed_count)?)
        .bind(account.locked_until)
        .bind(account.last_login_at)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Lost a race with another registration for the same email
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AccountError::EmailTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT account_id, email, role, password_hash, login_failed_count,
                   locked_until, last_login_at, created_at, updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT account_id, email, role, password_hash, login_failed_count,
                   locked_until, last_login_at, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn record_failure(
        &self,
        account_id: &AccountId,
        at: DateTime<Utc>,
    ) -> AccountResult<Account> {
        // Same rules as Account::record_failure_at, evaluated against the
        // stored row so concurrent failures serialize on the row lock
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts SET
                login_failed_count = CASE
                    WHEN locked_until IS NOT NULL AND locked_until <= $2 THEN 1
                    ELSE LEAST(login_failed_count + 1, $3)
                END,
                locked_until = CASE
                    WHEN locked_until IS NOT NULL AND locked_until > $2 THEN locked_until
                    WHEN locked_until IS NULL AND login_failed_count + 1 >= $3 THEN $4
                    ELSE NULL
                END,
                updated_at = $2
            WHERE account_id = $1
            RETURNING account_id, email, role, password_hash, login_failed_count,
                      locked_until, last_login_at, created_at, updated_at
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(at)
        .bind(failed_count_to_db(Account::MAX_LOGIN_FAILURES)?)
        .bind(at + Duration::minutes(Account::LOCKOUT_MINUTES))
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(AccountError::NotFound)?.into_account()
    }

    async fn record_login(
        &self,
        account_id: &AccountId,
        at: DateTime<Utc>,
    ) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts SET
                login_failed_count = 0,
                locked_until = NULL,
                last_login_at = $2,
                updated_at = $2
            WHERE account_id = $1
              AND (locked_until IS NULL OR locked_until <= $2)
            RETURNING account_id, email, role, password_hash, login_failed_count,
                      locked_until, last_login_at, created_at, updated_at
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(at)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }
}

fn failed_count_to_db(count: u16) -> AccountResult<i16> {
    i16::try_from(count)
        .map_err(|_| AccountError::Internal(format!("Login failure count out of range: {count}")))
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    role: String,
    password_hash: String,
    login_failed_count: i16,
    locked_until: Option<DateTime<Utc>>,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AccountResult<Account> {
        let role = AccountRole::from_code(&self.role).ok_or_else(|| {
            AccountError::Internal(format!("Unknown role in database: {}", self.role))
        })?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            role,
            password_hash: AccountPassword::from_phc_string(self.password_hash)?,
            login_failed_count: u16::try_from(self.login_failed_count).map_err(|_| {
                AccountError::Internal(format!(
                    "Negative login failure count in database: {}",
                    self.login_failed_count
                ))
            })?,
            locked_until: self.locked_until,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
