//! Integration tests for Kaufhaus.
//!
//! Each test builds its own in-memory SQLite database, runs the embedded
//! migrations, and exercises the repositories directly. No server process
//! or external database is required.
//!
//! # Test Categories
//!
//! - `catalog_cascade` - Cascade and delete-protection semantics
//! - `catalog_scenarios` - End-to-end catalog scenarios
//! - `catalog_validation` - The opt-in validation contract at the write path

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use kaufhaus_catalog::{AddressRepository, CountryRepository, CustomerRepository};
use kaufhaus_core::{
    Address, Country, Customer, NewAddress, NewArticle, NewCountry, NewCustomer,
    ArticleVariant, CountryId,
};

/// Fresh in-memory database with migrations applied.
///
/// # Panics
///
/// Panics if the pool cannot be created or a migration fails; tests cannot
/// run without a database.
pub async fn test_pool() -> SqlitePool {
    let pool = kaufhaus_catalog::connect_in_memory()
        .await
        .expect("in-memory pool");
    kaufhaus_catalog::MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

/// Insert a country with the given name.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn create_country(pool: &SqlitePool, name: &str) -> Country {
    CountryRepository::new(pool)
        .create(&NewCountry {
            name: name.to_string(),
        })
        .await
        .expect("create country")
}

/// Insert the Berlin address used across scenarios.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn create_berlin_address(pool: &SqlitePool, country_id: CountryId) -> Address {
    AddressRepository::new(pool)
        .create(&NewAddress {
            street: "Main St".to_string(),
            house_number: 1,
            postal_code: "10115".to_string(),
            city: "Berlin".to_string(),
            country_id,
        })
        .await
        .expect("create address")
}

/// Insert a customer named Alice at the given address.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn create_alice(pool: &SqlitePool, address_id: kaufhaus_core::AddressId) -> Customer {
    CustomerRepository::new(pool)
        .create(&NewCustomer {
            name: "Alice".to_string(),
            password: "changeme".to_string(),
            email: "alice@example.com".to_string(),
            address_id,
            last_online: None,
        })
        .await
        .expect("create customer")
}

/// A plain article with the given price.
#[must_use]
pub fn plain_article(price: Decimal) -> NewArticle {
    NewArticle {
        description: "Coffee mug".to_string(),
        price,
        units_available: 10,
        info: String::new(),
        variant: ArticleVariant::Plain,
    }
}
