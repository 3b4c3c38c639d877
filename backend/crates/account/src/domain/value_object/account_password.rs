//! Account Password Value Objects
//!
//! Domain wrappers over `platform::password`: [`RawPassword`] for user
//! input and [`AccountPassword`] for the stored Argon2id hash.

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::{AccountError, AccountResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Password as typed by the user. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Normalize (NFKC) and check the password policy
    pub fn new(raw: String) -> AccountResult<Self> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Account Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(HashedPassword);

impl AccountPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AccountResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AccountError::Internal(format!("Password hashing failed: {e}")))?;
        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AccountResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AccountError::Internal("Invalid password hash in database".to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Pepper must match the one used for hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
