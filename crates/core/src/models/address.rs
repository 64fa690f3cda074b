//! Countries and postal addresses.

use serde::{Deserialize, Serialize};

use crate::types::{AddressId, CountryId};

/// A country articles can be sold in.
///
/// Countries are delete-protected: removing one fails while any address
/// still references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Unique country ID.
    pub id: CountryId,
    /// Country name (e.g. "DE").
    pub name: String,
}

/// Insertable country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
}

/// A postal address, referenced by customers and orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Unique address ID.
    pub id: AddressId,
    /// Street name.
    pub street: String,
    /// House number.
    pub house_number: i32,
    /// Postal code.
    pub postal_code: String,
    /// City name.
    pub city: String,
    /// Country this address lies in (delete-protected).
    pub country_id: CountryId,
}

impl Address {
    /// Composite display line, e.g. `"Main St 1, 10115 Berlin - DE"`.
    #[must_use]
    pub fn display_line(&self, country: &Country) -> String {
        format!(
            "{} {}, {} {} - {}",
            self.street, self.house_number, self.postal_code, self.city, country.name
        )
    }
}

/// Insertable address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    pub street: String,
    pub house_number: i32,
    pub postal_code: String,
    pub city: String,
    pub country_id: CountryId,
}
