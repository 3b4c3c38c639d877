//! Account Entity
//!
//! A marketplace participant with login credentials and lockout tracking.

use chrono::{DateTime, Duration, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{
    account_password::AccountPassword, account_role::AccountRole, email::Email,
};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub email: Email,
    pub role: AccountRole,
    pub password_hash: AccountPassword,
    /// Consecutive login failure count
    pub login_failed_count: u16,
    /// Temporary lockout after too many failures
    pub locked_until: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Maximum login failures before temporary lockout
    pub const MAX_LOGIN_FAILURES: u16 = 5;
    /// Lockout duration in minutes
    pub const LOCKOUT_MINUTES: i64 = 15;

    pub fn new(email: Email, role: AccountRole, password_hash: AccountPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            email,
            role,
            password_hash,
            login_failed_count: 0,
            locked_until: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked_at(Utc::now())
    }

    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Record a failed login attempt at `now`
    ///
    /// An expired lock starts a fresh count. The counter never exceeds
    /// [`Self::MAX_LOGIN_FAILURES`], and an active lock keeps its end time.
    pub fn record_failure_at(&mut self, now: DateTime<Utc>) {
        if self.locked_until.is_some_and(|until| until <= now) {
            self.login_failed_count = 0;
            self.locked_until = None;
        }

        self.login_failed_count = (self.login_failed_count + 1).min(Self::MAX_LOGIN_FAILURES);
        self.updated_at = now;

        if self.locked_until.is_none() && self.login_failed_count >= Self::MAX_LOGIN_FAILURES {
            self.locked_until = Some(now + Duration::minutes(Self::LOCKOUT_MINUTES));
        }
    }

    /// Successful login: clear failures and stamp `last_login_at`
    pub fn record_login_at(&mut self, now: DateTime<Utc>) {
        self.login_failed_count = 0;
        self.locked_until = None;
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::account_password::RawPassword;

    fn account() -> Account {
        let raw = RawPassword::new("Bright-Harbor-77".to_string()).unwrap();
        Account::new(
            Email::new("ads@example.com").unwrap(),
            AccountRole::Advertiser,
            AccountPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_lockout_after_max_failures() {
        let mut account = account();
        let now = Utc::now();
        for _ in 0..Account::MAX_LOGIN_FAILURES - 1 {
            account.record_failure_at(now);
            assert!(!account.is_locked_at(now));
        }
        account.record_failure_at(now);
        assert!(account.is_locked_at(now));
        assert_eq!(account.login_failed_count, Account::MAX_LOGIN_FAILURES);
        assert_eq!(
            account.locked_until,
            Some(now + Duration::minutes(Account::LOCKOUT_MINUTES))
        );
    }

    #[test]
    fn test_lock_expires() {
        let mut account = account();
        account.locked_until = Some(Utc::now() - Duration::seconds(1));
        assert!(!account.is_locked());

        let until = Utc::now() + Duration::minutes(1);
        account.locked_until = Some(until);
        assert!(account.is_locked_at(until - Duration::seconds(1)));
        assert!(!account.is_locked_at(until));
    }

    #[test]
    fn test_failures_while_locked_are_capped() {
        let mut account = account();
        let now = Utc::now();
        for _ in 0..Account::MAX_LOGIN_FAILURES {
            account.record_failure_at(now);
        }
        let locked_until = account.locked_until;

        let later = now + Duration::minutes(1);
        for _ in 0..100 {
            account.record_failure_at(later);
        }
        assert_eq!(account.login_failed_count, Account::MAX_LOGIN_FAILURES);
        assert_eq!(account.locked_until, locked_until);
    }

    #[test]
    fn test_failure_after_expired_lock_starts_new_count() {
        let mut account = account();
        let now = Utc::now();
        for _ in 0..Account::MAX_LOGIN_FAILURES {
            account.record_failure_at(now);
        }

        let after_lock = now + Duration::minutes(Account::LOCKOUT_MINUTES);
        account.record_failure_at(after_lock);
        assert_eq!(account.login_failed_count, 1);
        assert_eq!(account.locked_until, None);
        assert!(!account.is_locked_at(after_lock));
    }

    #[test]
    fn test_login_resets_failures() {
        let mut account = account();
        let now = Utc::now();
        for _ in 0..Account::MAX_LOGIN_FAILURES {
            account.record_failure_at(now);
        }
        account.record_login_at(now);
        assert_eq!(account.login_failed_count, 0);
        assert!(!account.is_locked_at(now));
        assert_eq!(account.last_login_at, Some(now));
    }
}
