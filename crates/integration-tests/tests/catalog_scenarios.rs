//! End-to-end catalog scenarios.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use kaufhaus_catalog::{
    AddressRepository, ArticleRepository, AvailabilityRepository, CountryRepository,
    CustomerRepository, FeedbackRepository, OrderRepository,
};
use kaufhaus_core::{
    ArticleVariant, BookDetails, FeedbackSubject, MovieDetails, NewArticle, NewAvailability,
    NewFeedback, NewOrder, NewOrderLine, OrderStatus, SubjectKind,
};

use kaufhaus_integration_tests::{
    create_alice, create_berlin_address, create_country, plain_article, test_pool,
};

#[tokio::test]
async fn customer_resolves_to_display_address() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let address = create_berlin_address(&pool, germany.id).await;
    let alice = create_alice(&pool, address.id).await;

    let customers = CustomerRepository::new(&pool);
    let customer = customers
        .get(alice.id)
        .await
        .expect("get")
        .expect("customer exists");
    assert_eq!(customer.name, "Alice");
    assert_eq!(customers.list().await.expect("list").len(), 1);

    let address = AddressRepository::new(&pool)
        .get(customer.address_id)
        .await
        .expect("get")
        .expect("address exists");
    let country = CountryRepository::new(&pool)
        .get(address.country_id)
        .await
        .expect("get")
        .expect("country exists");

    assert_eq!(address.display_line(&country), "Main St 1, 10115 Berlin - DE");
}

#[tokio::test]
async fn movie_and_book_variants_round_trip() {
    let pool = test_pool().await;
    let articles = ArticleRepository::new(&pool);

    let movie = articles
        .create(&NewArticle {
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
        })
        .await
        .expect("create movie");

    let book = articles
        .create(&NewArticle {
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
        })
        .await
        .expect("create book");

    let fetched = articles
        .get(movie.id)
        .await
        .expect("get")
        .expect("movie exists");
    assert_eq!(fetched.price, Decimal::new(1499, 2));
    match fetched.variant {
        ArticleVariant::Movie(details) => {
            assert_eq!(details.director, "Wolfgang Petersen");
            assert_eq!(details.release_year, 1981);
            assert_eq!(details.duration_minutes, 149);
        }
        other => panic!("expected movie variant, got {other:?}"),
    }

    let fetched = articles
        .get(book.id)
        .await
        .expect("get")
        .expect("book exists");
    match fetched.variant {
        ArticleVariant::Book(details) => {
            assert_eq!(details.isbn, "978-1718503106");
            assert_eq!(details.page_count, 560);
        }
        other => panic!("expected book variant, got {other:?}"),
    }

    let all = articles.list().await.expect("list");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn order_round_trips_with_lines_and_status() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let address = create_berlin_address(&pool, germany.id).await;
    let alice = create_alice(&pool, address.id).await;

    let mug = ArticleRepository::new(&pool)
        .create(&plain_article(Decimal::new(999, 2)))
        .await
        .expect("create article");

    let orders = OrderRepository::new(&pool);
    // Whole seconds so the stored text round-trips exactly.
    let placed_at = chrono::DateTime::from_timestamp(Utc::now().timestamp() + 86_400, 0)
        .expect("valid timestamp");
    let order = orders
        .create(
            &NewOrder {
                customer_id: alice.id,
                placed_at,
                status: OrderStatus::default(),
                delivery_address_id: address.id,
                billing_address_id: address.id,
            },
            &[NewOrderLine {
                article_id: mug.id,
                quantity: 3,
            }],
        )
        .await
        .expect("create order");

    let fetched = orders
        .get(order.id)
        .await
        .expect("get")
        .expect("order exists");
    assert_eq!(fetched.status, OrderStatus::Placed);
    assert_eq!(fetched.customer_id, alice.id);
    assert_eq!(fetched.placed_at, placed_at);

    let lines = orders.lines(order.id).await.expect("lines");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].article_id, mug.id);
    assert_eq!(lines[0].quantity, 3);
}

#[tokio::test]
async fn order_status_has_no_transition_rules() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let address = create_berlin_address(&pool, germany.id).await;
    let alice = create_alice(&pool, address.id).await;

    let orders = OrderRepository::new(&pool);
    let order = orders
        .create(
            &NewOrder {
                customer_id: alice.id,
                placed_at: Utc::now() + Duration::days(1),
                status: OrderStatus::Placed,
                delivery_address_id: address.id,
                billing_address_id: address.id,
            },
            &[],
        )
        .await
        .expect("create order");

    // Any status can follow any other, including back to Placed.
    for status in [
        OrderStatus::Shipped,
        OrderStatus::Placed,
        OrderStatus::Cancelled,
        OrderStatus::Shipped,
    ] {
        orders.set_status(order.id, status).await.expect("set status");
        let fetched = orders
            .get(order.id)
            .await
            .expect("get")
            .expect("order exists");
        assert_eq!(fetched.status, status);
    }
}

#[tokio::test]
async fn feedback_subject_pair_round_trips() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let address = create_berlin_address(&pool, germany.id).await;
    let alice = create_alice(&pool, address.id).await;

    let mug = ArticleRepository::new(&pool)
        .create(&plain_article(Decimal::new(999, 2)))
        .await
        .expect("create article");

    let feedback = FeedbackRepository::new(&pool);
    let review = feedback
        .create(&NewFeedback {
            subject: FeedbackSubject {
                kind: SubjectKind::Country,
                id: germany.id.as_i64(),
            },
            customer_id: alice.id,
            article_id: mug.id,
            created_at: Utc::now(),
            comment: "Ships fast in DE.".to_string(),
        })
        .await
        .expect("create feedback");

    let fetched = feedback
        .get(review.id)
        .await
        .expect("get")
        .expect("feedback exists");
    assert_eq!(fetched.subject.kind, SubjectKind::Country);
    assert_eq!(fetched.subject.id, germany.id.as_i64());

    let for_article = feedback
        .list_for_article(mug.id)
        .await
        .expect("list feedback");
    assert_eq!(for_article.len(), 1);
    assert_eq!(for_article[0].comment, "Ships fast in DE.");

    feedback
        .update_comment(review.id, "Ships fast everywhere.")
        .await
        .expect("update comment");
    let fetched = feedback
        .get(review.id)
        .await
        .expect("get")
        .expect("feedback exists");
    assert_eq!(fetched.comment, "Ships fast everywhere.");

    feedback.delete(review.id).await.expect("delete");
    assert!(feedback.get(review.id).await.expect("get").is_none());
}

#[tokio::test]
async fn availability_links_country_and_article() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;

    let mug = ArticleRepository::new(&pool)
        .create(&plain_article(Decimal::new(999, 2)))
        .await
        .expect("create article");

    let availability = AvailabilityRepository::new(&pool);
    let link = availability
        .create(&NewAvailability {
            country_id: germany.id,
            article_id: mug.id,
            tax_rate: Decimal::new(19, 2),
        })
        .await
        .expect("create availability");

    let for_country = availability
        .list_for_country(germany.id)
        .await
        .expect("list for country");
    assert_eq!(for_country.len(), 1);
    assert_eq!(for_country[0].id, link.id);
    assert_eq!(for_country[0].tax_rate, Decimal::new(19, 2));

    availability
        .set_tax_rate(link.id, Decimal::new(20, 2))
        .await
        .expect("set tax rate");
    let fetched = availability
        .get(link.id)
        .await
        .expect("get")
        .expect("availability exists");
    assert_eq!(fetched.tax_rate, Decimal::new(20, 2));

    availability.delete(link.id).await.expect("delete");
    assert!(availability.get(link.id).await.expect("get").is_none());
}

#[tokio::test]
async fn updates_round_trip() {
    let pool = test_pool().await;
    let germany = create_country(&pool, "DE").await;
    let address = create_berlin_address(&pool, germany.id).await;
    let alice = create_alice(&pool, address.id).await;

    let countries = CountryRepository::new(&pool);
    countries.rename(germany.id, "Germany").await.expect("rename");
    let fetched = countries
        .get(germany.id)
        .await
        .expect("get")
        .expect("country exists");
    assert_eq!(fetched.name, "Germany");

    let articles = ArticleRepository::new(&pool);
    let mug = articles
        .create(&plain_article(Decimal::new(999, 2)))
        .await
        .expect("create article");
    articles
        .set_price(mug.id, Decimal::new(1299, 2))
        .await
        .expect("set price");
    articles.set_units_available(mug.id, 7).await.expect("set units");
    let fetched = articles
        .get(mug.id)
        .await
        .expect("get")
        .expect("article exists");
    assert_eq!(fetched.price, Decimal::new(1299, 2));
    assert_eq!(fetched.units_available, 7);

    let addresses = AddressRepository::new(&pool);
    addresses
        .update(
            address.id,
            &kaufhaus_core::NewAddress {
                street: "Side St".to_string(),
                house_number: 2,
                postal_code: "10117".to_string(),
                city: "Berlin".to_string(),
                country_id: germany.id,
            },
        )
        .await
        .expect("update address");
    let fetched = addresses
        .get(address.id)
        .await
        .expect("get")
        .expect("address exists");
    assert_eq!(fetched.street, "Side St");
    assert_eq!(fetched.house_number, 2);

    let customers = CustomerRepository::new(&pool);
    let date = NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date");
    customers
        .set_last_online(alice.id, date)
        .await
        .expect("set last online");
    let fetched = customers
        .get(alice.id)
        .await
        .expect("get")
        .expect("customer exists");
    assert_eq!(fetched.last_online, Some(date));

    customers
        .update(
            alice.id,
            &kaufhaus_core::NewCustomer {
                name: "Alice B.".to_string(),
                password: fetched.password.clone(),
                email: "alice.b@example.com".to_string(),
                address_id: fetched.address_id,
                last_online: fetched.last_online,
            },
        )
        .await
        .expect("update customer");
    let fetched = customers
        .get(alice.id)
        .await
        .expect("get")
        .expect("customer exists");
    assert_eq!(fetched.name, "Alice B.");
    assert_eq!(fetched.email, "alice.b@example.com");

    let all = CountryRepository::new(&pool).list().await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Germany");
}
