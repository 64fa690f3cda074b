//! Seed the catalog with demo data.
//!
//! Every record that has a validation rule goes through the explicit
//! validate-then-persist sequence: `validate_*` first, repository `create`
//! second. Skipping the first step would persist the record unchecked -
//! that permissiveness is part of the catalog contract, and the seed is
//! the reference write path that does it properly.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use kaufhaus_catalog::{
    AddressRepository, ArticleRepository, AvailabilityRepository, CountryRepository,
    CustomerRepository, FeedbackRepository, OrderRepository, RepositoryError,
};
use kaufhaus_core::{
    ArticleVariant, BookDetails, FeedbackSubject, MovieDetails, NewAddress, NewArticle,
    NewAvailability, NewCountry, NewCustomer, NewFeedback, NewOrder, NewOrderLine,
    OrderStatus, SubjectKind, ValidationError, validate_article, validate_availability,
    validate_order,
};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Seed the catalog with a small demo dataset.
///
/// # Errors
///
/// Returns `SeedError` if a record fails validation or a write fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url();
    let pool = kaufhaus_catalog::create_pool(&database_url).await?;
    kaufhaus_catalog::MIGRATOR.run(&pool).await?;

    info!("Seeding countries and addresses...");
    let countries = CountryRepository::new(&pool);
    let germany = countries
        .create(&NewCountry {
            name: "DE".to_string(),
        })
        .await?;
    let austria = countries
        .create(&NewCountry {
            name: "AT".to_string(),
        })
        .await?;

    let addresses = AddressRepository::new(&pool);
    let berlin = addresses
        .create(&NewAddress {
            street: "Main St".to_string(),
            house_number: 1,
            postal_code: "10115".to_string(),
            city: "Berlin".to_string(),
            country_id: germany.id,
        })
        .await?;

    info!("Seeding customers...");
    let customers = CustomerRepository::new(&pool);
    let alice = customers
        .create(&NewCustomer {
            name: "Alice".to_string(),
            password: "changeme".to_string(),
            email: "alice@example.com".to_string(),
            address_id: berlin.id,
            last_online: None,
        })
        .await?;

    info!("Seeding articles...");
    let articles = ArticleRepository::new(&pool);

    let boat_movie = NewArticle {
        description: "Das Boot".to_string(),
        price: Decimal::new(1499, 2),
        units_available: 12,
        info: "Director's cut".to_string(),
        variant: ArticleVariant::Movie(MovieDetails {
            director: "Wolfgang Petersen".to_string(),
            release_year: 1981,
            genre: "War".to_string(),
            duration_minutes: 149,
        }),
    };
    validate_article(&boat_movie)?;
    let boat_movie = articles.create(&boat_movie).await?;

    let rust_book = NewArticle {
        description: "The Rust Programming Language".to_string(),
        price: Decimal::new(3999, 2),
        units_available: 5,
        info: String::new(),
        variant: ArticleVariant::Book(BookDetails {
            author: "Steve Klabnik and Carol Nichols".to_string(),
            publisher: "No Starch Press".to_string(),
            page_count: 560,
            isbn: "978-1718503106".to_string(),
        }),
    };
    validate_article(&rust_book)?;
    let rust_book = articles.create(&rust_book).await?;

    let mug = NewArticle {
        description: "Coffee mug".to_string(),
        price: Decimal::new(999, 2),
        units_available: 100,
        info: "Dishwasher safe".to_string(),
        variant: ArticleVariant::Plain,
    };
    validate_article(&mug)?;
    let mug = articles.create(&mug).await?;

    info!("Seeding availability...");
    let availability = AvailabilityRepository::new(&pool);
    for (country_id, article_id) in [
        (germany.id, boat_movie.id),
        (germany.id, rust_book.id),
        (germany.id, mug.id),
        (austria.id, rust_book.id),
    ] {
        let link = NewAvailability {
            country_id,
            article_id,
            tax_rate: Decimal::new(19, 2),
        };
        validate_availability(&link)?;
        availability.create(&link).await?;
    }

    info!("Seeding orders...");
    let orders = OrderRepository::new(&pool);
    let order = NewOrder {
        customer_id: alice.id,
        placed_at: Utc::now() + Duration::days(1),
        status: OrderStatus::Placed,
        delivery_address_id: berlin.id,
        billing_address_id: berlin.id,
    };
    validate_order(&order)?;
    let order = orders
        .create(
            &order,
            &[
                NewOrderLine {
                    article_id: rust_book.id,
                    quantity: 1,
                },
                NewOrderLine {
                    article_id: mug.id,
                    quantity: 2,
                },
            ],
        )
        .await?;

    info!("Seeding feedback...");
    let feedback = FeedbackRepository::new(&pool);
    feedback
        .create(&NewFeedback {
            subject: FeedbackSubject {
                kind: SubjectKind::Order,
                id: order.id.as_i64(),
            },
            customer_id: alice.id,
            article_id: rust_book.id,
            created_at: Utc::now(),
            comment: "Arrived quickly, great read.".to_string(),
        })
        .await?;

    info!("Seed complete!");
    Ok(())
}
