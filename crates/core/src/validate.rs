//! Opt-in validation rules.
//!
//! Validation is NOT invoked by the persistence layer. Callers invoke these
//! functions explicitly before persisting; a caller that skips them persists
//! the record as-is, invalid values included. The storefront and CLI write
//! paths follow the validate-then-persist sequence.

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{NewArticle, NewAvailability, NewOrder};

/// A record failed one of the catalog validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Check that an article's price is positive.
///
/// # Errors
///
/// Returns `ValidationError("price must be positive")` if `price <= 0`.
pub fn validate_article(article: &NewArticle) -> Result<(), ValidationError> {
    if article.price <= Decimal::ZERO {
        return Err(ValidationError::new("price must be positive"));
    }
    Ok(())
}

/// Check that an availability's tax rate is positive.
///
/// # Errors
///
/// Returns `ValidationError("tax rate must be positive")` if `tax_rate <= 0`.
pub fn validate_availability(availability: &NewAvailability) -> Result<(), ValidationError> {
    if availability.tax_rate <= Decimal::ZERO {
        return Err(ValidationError::new("tax rate must be positive"));
    }
    Ok(())
}

/// Check that an order's timestamp lies strictly in the future.
///
/// Creation-time check only; the timestamp is never re-validated later.
///
/// # Errors
///
/// Returns `ValidationError("date is in the past")` if `placed_at <= now`.
pub fn validate_order(order: &NewOrder) -> Result<(), ValidationError> {
    if order.placed_at <= Utc::now() {
        return Err(ValidationError::new("date is in the past"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::ArticleVariant;
    use crate::types::{AddressId, ArticleId, CountryId, CustomerId};
    use crate::types::status::OrderStatus;

    fn article_with_price(price: Decimal) -> NewArticle {
        NewArticle {
            description: "Das Boot".to_string(),
            price,
            units_available: 3,
            info: String::new(),
            variant: ArticleVariant::Plain,
        }
    }

    #[test]
    fn positive_price_passes() {
        let article = article_with_price(Decimal::new(999, 2));
        assert!(validate_article(&article).is_ok());
    }

    #[test]
    fn zero_price_is_rejected() {
        let article = article_with_price(Decimal::ZERO);
        let err = validate_article(&article).expect_err("zero price");
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn negative_price_is_rejected() {
        let article = article_with_price(Decimal::new(-100, 2));
        assert!(validate_article(&article).is_err());
    }

    #[test]
    fn positive_tax_rate_passes() {
        let availability = NewAvailability {
            country_id: CountryId::new(1),
            article_id: ArticleId::new(1),
            tax_rate: Decimal::new(19, 2),
        };
        assert!(validate_availability(&availability).is_ok());
    }

    #[test]
    fn non_positive_tax_rate_is_rejected() {
        for tax_rate in [Decimal::ZERO, Decimal::new(-19, 2)] {
            let availability = NewAvailability {
                country_id: CountryId::new(1),
                article_id: ArticleId::new(1),
                tax_rate,
            };
            let err = validate_availability(&availability).expect_err("non-positive tax");
            assert_eq!(err.to_string(), "tax rate must be positive");
        }
    }

    fn order_placed_at(placed_at: chrono::DateTime<Utc>) -> NewOrder {
        NewOrder {
            customer_id: CustomerId::new(1),
            placed_at,
            status: OrderStatus::default(),
            delivery_address_id: AddressId::new(1),
            billing_address_id: AddressId::new(1),
        }
    }

    #[test]
    fn future_order_date_passes() {
        let order = order_placed_at(Utc::now() + Duration::hours(1));
        assert!(validate_order(&order).is_ok());
    }

    #[test]
    fn past_order_date_is_rejected() {
        let order = order_placed_at(Utc::now() - Duration::hours(1));
        let err = validate_order(&order).expect_err("past date");
        assert_eq!(err.to_string(), "date is in the past");
    }
}
