//! The opt-in validation contract at the write path.
//!
//! Repositories never invoke validation. A caller that skips the
//! `validate_*` step persists out-of-range values without error; a caller
//! that follows validate-then-persist is stopped before the write.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use kaufhaus_catalog::{ArticleRepository, AvailabilityRepository, OrderRepository};
use kaufhaus_core::{
    NewAvailability, NewOrder, OrderStatus, validate_article, validate_availability,
    validate_order,
};

use kaufhaus_integration_tests::{
    create_alice, create_berlin_address, create_country, plain_article, test_pool,
};

#[tokio::test]
async fn skipping_validation_persists_invalid_price() {
    let pool = test_pool().await;
    let articles = ArticleRepository::new(&pool);

    let free_mug = plain_article(Decimal::ZERO);
    assert!(validate_article(&free_mug).is_err());

    // The repository takes it anyway: validation is the caller's job.
    let stored = articles.create(&free_mug).await.expect("create");
    let fetched = articles
        .get(stored.id)
        .await
        .expect("get")
        .expect("article exists");
    assert_eq!(fetched.price, Decimal::ZERO);
}

#[tokio::test]
async fn validate_then_persist_stops_invalid_article() {
    let pool = test_pool().await;
    let articles = ArticleRepository::new(&pool);

    let priced = plain_article(Decimal::new(999, 2));
    let free = plain_article(Decimal::ZERO);

    assert!(validate_article(&priced).is_ok());
    articles.create(&priced).await.expect("create valid");

    let err = validate_article(&free).expect_err("invalid price");
    assert_eq!(err.to_string(), "price must be positive");
    // Caller stops here; nothing is written for the invalid article.
    assert_eq!(articles.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn skipping_validation_persists_invalid_tax_rate() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let mug = ArticleRepository::new(&pool)
        .create(&plain_article(Decimal::new(999, 2)))
        .await
        .expect("create article");

    let link = NewAvailability {
        country_id: germany.id,
        article_id: mug.id,
        tax_rate: Decimal::ZERO,
    };
    assert!(validate_availability(&link).is_err());

    let availability = AvailabilityRepository::new(&pool);
    let stored = availability.create(&link).await.expect("create");
    let fetched = availability
        .get(stored.id)
        .await
        .expect("get")
        .expect("availability exists");
    assert_eq!(fetched.tax_rate, Decimal::ZERO);
}

#[tokio::test]
async fn skipping_validation_persists_past_dated_order() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let address = create_berlin_address(&pool, germany.id).await;
    let alice = create_alice(&pool, address.id).await;

    let order = NewOrder {
        customer_id: alice.id,
        placed_at: Utc::now() - Duration::days(1),
        status: OrderStatus::Placed,
        delivery_address_id: address.id,
        billing_address_id: address.id,
    };
    assert!(validate_order(&order).is_err());

    let orders = OrderRepository::new(&pool);
    let stored = orders.create(&order, &[]).await.expect("create");
    assert!(orders.get(stored.id).await.expect("get").is_some());
}
