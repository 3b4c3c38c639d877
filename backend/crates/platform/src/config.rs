//! Environment Configuration
//!
//! Typed readers over process environment variables. The binary loads `.env`
//! first (via `dotenvy`) and then reads everything through these helpers so
//! that a missing or malformed variable is reported by name.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Read a required variable
pub fn required(key: &str) -> Result<String, ConfigError> {
    optional(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read an optional variable; empty values count as unset
pub fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

/// Parse a raw value, naming the key on failure
pub fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Split a comma-separated list, dropping blanks
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
