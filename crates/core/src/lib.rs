//! Kaufhaus Core - Shared domain types.
//!
//! This crate provides the types used across all Kaufhaus components:
//! - `catalog` - SQLite persistence layer (repositories + migrations)
//! - `storefront` - Public country listing
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and status enums
//! - [`models`] - Entity records (countries, addresses, customers, articles,
//!   feedback, availability, orders)
//! - [`validate`] - Opt-in validation rules invoked before persisting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;
pub mod validate;

pub use models::*;
pub use types::*;
pub use validate::{
    ValidationError, validate_article, validate_availability, validate_order,
};
