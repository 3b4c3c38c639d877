//! Application Configuration

/// Account application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountConfig {
    pub fn with_pepper(pepper: Vec<u8>) -> Self {
        Self {
            password_pepper: Some(pepper),
        }
    }

    /// No pepper; hashes stay verifiable across restarts without secrets
    pub fn development() -> Self {
        Self::default()
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
