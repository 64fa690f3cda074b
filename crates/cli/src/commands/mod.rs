//! CLI subcommand implementations.

pub mod migrate;
pub mod seed;

/// Database URL from the environment, with the default file-backed catalog.
pub(crate) fn database_url() -> String {
    std::env::var("KAUFHAUS_DATABASE_URL").unwrap_or_else(|_| "sqlite://kaufhaus.db".to_string())
}
