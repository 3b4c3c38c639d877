//! Entity Module

pub mod campaign;
