//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! kh-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `KAUFHAUS_DATABASE_URL` - SQLite connection string
//!   (default: `sqlite://kaufhaus.db`)

use thiserror::Error;
use tracing::info;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the embedded catalog migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database cannot be reached or a
/// migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url();

    info!("Connecting to catalog database...");
    let pool = kaufhaus_catalog::create_pool(&database_url).await?;

    info!("Running catalog migrations...");
    kaufhaus_catalog::MIGRATOR.run(&pool).await?;

    info!("Catalog migrations complete!");
    Ok(())
}
