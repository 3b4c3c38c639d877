//! Shared Kernel
//!
//! Vocabulary shared by the account and campaign contexts:
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed identifiers ([`id::Id`]) for marketplace entities
//!
//! Only things with the same meaning in every context belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
