//! Per-country article availability.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ArticleId, AvailabilityId, CountryId};

/// "This article is sellable in this country at this tax rate."
///
/// Removing either the country or the article cascades and removes the
/// availability row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Unique availability ID.
    pub id: AvailabilityId,
    /// Country the article is sellable in.
    pub country_id: CountryId,
    /// The sellable article.
    pub article_id: ArticleId,
    /// Tax rate. Must be positive; checked by
    /// [`validate_availability`](crate::validate::validate_availability).
    pub tax_rate: Decimal,
}

/// Insertable availability record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAvailability {
    pub country_id: CountryId,
    pub article_id: ArticleId,
    pub tax_rate: Decimal,
}
