//! Account Backend Module
//!
//! Marketplace participants (advertisers and channel admins) and their
//! credentials.
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, value objects, repository trait
//! - `application/` - Register, login, and lookup use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id plus an optional server-side pepper
//! - Unknown email and wrong password return the same error
//! - Temporary lockout after repeated failed logins

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use domain::{Account, AccountRole};
pub use error::{AccountError, AccountResult};
pub use infra::{InMemoryAccountRepository, PgAccountRepository};
pub use presentation::router::{account_router, account_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
