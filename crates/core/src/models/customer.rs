//! Customer records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{AddressId, CustomerId};

/// A shop customer.
///
/// Deleting a customer's address cascades and removes the customer as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Customer name.
    pub name: String,
    /// Stored as an opaque string; hashing is out of scope for the catalog.
    pub password: String,
    /// Email address, stored as a plain string.
    pub email: String,
    /// The customer's address (cascade-delete).
    pub address_id: AddressId,
    /// When the customer was last online, if known.
    pub last_online: Option<NaiveDate>,
}

/// Insertable customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub password: String,
    pub email: String,
    pub address_id: AddressId,
    pub last_online: Option<NaiveDate>,
}
