//! Server Configuration
//!
//! Everything the binary reads from the environment, gathered once at
//! startup.

use base64::Engine;
use base64::engine::general_purpose;
use platform::config::{self, ConfigError};
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    /// Allowed CORS origins
    pub frontend_origins: Vec<String>,
    /// Decoded `PASSWORD_PEPPER`
    pub password_pepper: Option<Vec<u8>>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = config::required("DATABASE_URL")?;

        let bind_addr = config::parse_value(
            "BIND_ADDR",
            &config::optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let database_max_connections =
            config::parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let frontend_origins = config::split_list(
            &config::optional("FRONTEND_ORIGINS")
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let password_pepper = config::optional("PASSWORD_PEPPER")
            .map(|raw| decode_pepper("PASSWORD_PEPPER", &raw))
            .transpose()?;

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            frontend_origins,
            password_pepper,
        })
    }
}

/// Standard base64, at least 16 bytes once decoded
fn decode_pepper(key: &str, raw: &str) -> Result<Vec<u8>, ConfigError> {
    let bytes = general_purpose::STANDARD
        .decode(raw.trim())
        .map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

    if bytes.len() < 16 {
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            reason: format!("expected at least 16 bytes, got {}", bytes.len()),
        });
    }

    Ok(bytes)
}
