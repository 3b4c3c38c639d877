//! Password Hashing and Verification
//!
//! Stateless hash/verify pair for account passwords:
//! - Argon2id hashing (memory-hard, OWASP recommended parameters)
//! - Zeroization of clear text and peppered buffers
//! - Constant-time comparison (inside `argon2`)
//! - Optional application-wide pepper

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants (NIST SP 800-63B)
// ============================================================================

/// Minimum password length in code points
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, erased from memory on drop
///
/// Not `Clone`, and `Debug` output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("Orbit-Lantern-42".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and wrap a password
    ///
    /// The input is NFKC-normalized first; length is counted in code points.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();
        let candidate = Self(normalized);

        if candidate.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = candidate.0.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Space, tab and newline are allowed
        if candidate
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_common_pattern(&candidate.0) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(candidate)
    }

    /// Wrap without policy checks
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash with Argon2id and a fresh random salt
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret appended before hashing
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(&mut OsRng);

        // Default params: m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format
///
/// The PHC string carries algorithm, version, parameters and salt, so it is
/// the only thing the database stores.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse a PHC string (e.g. from the database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// `pepper` must match the one used when hashing.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        let password_bytes = password.peppered(pepper);

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }

    /// True when the stored hash is not Argon2id
    pub fn needs_rehash(&self) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // "aaaaaaaa"
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &[
        "qwerty",
        "asdfgh",
        "zxcvbn",
        "qazwsx",
        "1qaz2wsx",
    ];

    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdefgh",
        "letmein1",
        "welcome1",
        "admin123",
        "iloveyou",
        "sunshine",
        "princess",
        "football",
        "baseball",
        "trustno1",
        "advertiser",
        "marketplace",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// All digits, at least four, strictly ascending or descending by one
fn is_sequential_numbers(s: &str) -> bool {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "ab1".repeat(MAX_PASSWORD_LENGTH);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert!(matches!(
            ClearTextPassword::new(String::new()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("Orbit\u{0007}Lantern".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_password_common_pattern() {
        for weak in ["password123", "qwertyuiop", "12345678", "98765432", "zzzzzzzz"] {
            assert!(
                matches!(
                    ClearTextPassword::new(weak.to_string()),
                    Err(PasswordPolicyError::CommonPattern)
                ),
                "{weak} should be rejected"
            );
        }
    }

    #[test]
    fn test_digits_with_letters_are_not_sequential() {
        assert!(!is_sequential_numbers("a1234567"));
        assert!(ClearTextPassword::new("Budget2024Q1".to_string()).is_ok());
    }

    #[test]
    fn test_unicode_password_is_normalized() {
        // Full-width digits normalize to ASCII under NFKC
        let a = ClearTextPassword::new("Ｌａｎｔｅｒｎ４２！".to_string()).unwrap();
        let b = ClearTextPassword::new("Lantern42!".to_string()).unwrap();
        let hashed = a.hash(None).unwrap();
        assert!(hashed.verify(&b, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let pepper = b"marketplace_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_phc_string_is_argon2id() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(!hashed.needs_rehash());

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(matches!(
            HashedPassword::from_phc_string("not_a_valid_hash"),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret-value".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
