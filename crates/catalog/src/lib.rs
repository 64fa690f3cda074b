//! SQLite persistence for the Kaufhaus catalog.
//!
//! # Tables
//!
//! - `country` - Countries (delete-protected while referenced by an address)
//! - `address` - Postal addresses
//! - `customer` - Customers (cascade-deleted with their address)
//! - `article` / `movie` / `book` - Articles with variant payload rows
//! - `feedback` - Customer feedback with a generic subject reference
//! - `availability` - Per-country sellability with tax rate
//! - `shop_order` / `order_line_item` - Orders and their lines
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/catalog/migrations/` and run via:
//! ```bash
//! cargo run -p kaufhaus-cli -- migrate
//! ```
//!
//! # Validation
//!
//! Repositories never invoke the validation rules in `kaufhaus-core`.
//! Callers validate explicitly before persisting; a caller that skips
//! validation persists the record as-is.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod addresses;
pub mod articles;
pub mod availability;
pub mod countries;
pub mod customers;
pub mod feedback;
pub mod orders;

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use addresses::AddressRepository;
pub use articles::ArticleRepository;
pub use availability::AvailabilityRepository;
pub use countries::CountryRepository;
pub use customers::CustomerRepository;
pub use feedback::FeedbackRepository;
pub use orders::OrderRepository;

/// Embedded catalog migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// A foreign-key rule refused the write (e.g. deleting a country that
    /// is still referenced by an address).
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The database file is created if missing and foreign-key enforcement is
/// switched on for every connection.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://kaufhaus.db`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::debug!(database_url, "Opening SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a single-connection in-memory pool, mainly for tests and seeds.
///
/// The pool is pinned to one connection that never expires; an in-memory
/// SQLite database lives and dies with its connection.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Map a sqlx error to `RepositoryError::ForeignKey` when a foreign-key
/// rule caused it, passing everything else through as `Database`.
///
/// SQLite reports an `ON DELETE RESTRICT` violation with extended code
/// 1811 (`SQLITE_CONSTRAINT_TRIGGER`) rather than 787, so a plain
/// `is_foreign_key_violation()` check misses the delete-protection path.
pub(crate) fn map_fk_violation(e: sqlx::Error, context: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && (db_err.is_foreign_key_violation()
            || db_err.code().as_deref() == Some("1811"))
    {
        return RepositoryError::ForeignKey(context.to_string());
    }
    RepositoryError::Database(e)
}

/// Parse a decimal stored as TEXT, surfacing malformed values as corruption.
pub(crate) fn parse_decimal(raw: &str, column: &str) -> Result<Decimal, RepositoryError> {
    Decimal::from_str(raw).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid decimal in {column}: {e}"))
    })
}

/// Parse a stored enum discriminant (order status, article kind, ...).
pub(crate) fn parse_stored<T>(raw: &str, column: &str) -> Result<T, RepositoryError>
where
    T: FromStr<Err = String>,
{
    raw.parse()
        .map_err(|e: String| RepositoryError::DataCorruption(format!("in {column}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaufhaus_core::OrderStatus;

    #[tokio::test]
    async fn migrations_apply_cleanly() {
        let pool = connect_in_memory().await.expect("pool");
        MIGRATOR.run(&pool).await.expect("migrate");
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        let err = parse_decimal("not-a-number", "article.price").expect_err("garbage");
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn parse_stored_reads_order_status() {
        let status: OrderStatus = parse_stored("shipped", "shop_order.status").expect("parse");
        assert_eq!(status, OrderStatus::Shipped);
    }
}
