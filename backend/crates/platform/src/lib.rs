//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the marketplace backend:
//! - Password hashing (Argon2id, NIST SP 800-63B policy)
//! - Typed environment configuration readers

pub mod config;
pub mod password;
