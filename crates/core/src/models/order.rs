//! Orders and their line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AddressId, ArticleId, CustomerId, OrderId, OrderLineItemId};
use crate::types::status::OrderStatus;

/// A placed order.
///
/// Deleting the customer or either address cascades and removes the order.
/// Delivery and billing addresses are independent references and may point
/// at the same address row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The ordering customer (cascade-delete).
    pub customer_id: CustomerId,
    /// Order timestamp. Must be strictly in the future at creation time per
    /// [`validate_order`](crate::validate::validate_order); never re-checked
    /// afterwards.
    pub placed_at: DateTime<Utc>,
    /// Current status. Plain attribute, no transition enforcement.
    pub status: OrderStatus,
    /// Where to deliver (cascade-delete).
    pub delivery_address_id: AddressId,
    /// Where to send the bill (cascade-delete).
    pub billing_address_id: AddressId,
}

/// Insertable order record. Line items are passed separately so the
/// repository can insert order and lines in one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub delivery_address_id: AddressId,
    pub billing_address_id: AddressId,
}

/// A line of an order: one article and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Unique line item ID.
    pub id: OrderLineItemId,
    /// The order this line belongs to (cascade-delete).
    pub order_id: OrderId,
    /// The ordered article (cascade-delete).
    pub article_id: ArticleId,
    /// How many units were ordered.
    pub quantity: i32,
}

/// Insertable order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub article_id: ArticleId,
    pub quantity: i32,
}
