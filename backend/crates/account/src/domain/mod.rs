//! Domain Layer
//!
//! Contains the account entity, value objects, and repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use repository::AccountRepository;
pub use value_object::account_role::AccountRole;
