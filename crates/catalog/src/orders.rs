//! Order repository.
//!
//! Orders and their line items are written in one transaction. The status
//! column is a plain attribute: `set_status` accepts any value regardless
//! of the current one.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kaufhaus_core::{
    NewOrder, NewOrderLine, Order, OrderId, OrderLineItem, OrderStatus,
};

use crate::{RepositoryError, parse_stored};

fn order_from_row(r: &SqliteRow) -> Result<Order, RepositoryError> {
    Ok(Order {
        id: r.try_get("id")?,
        customer_id: r.try_get("customer_id")?,
        placed_at: r.try_get("placed_at")?,
        status: parse_stored(r.try_get::<&str, _>("status")?, "shop_order.status")?,
        delivery_address_id: r.try_get("delivery_address_id")?,
        billing_address_id: r.try_get("billing_address_id")?,
    })
}

fn line_from_row(r: &SqliteRow) -> Result<OrderLineItem, RepositoryError> {
    Ok(OrderLineItem {
        id: r.try_get("id")?,
        order_id: r.try_get("order_id")?,
        article_id: r.try_get("article_id")?,
        quantity: r.try_get("quantity")?,
    })
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an order and its line items in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the customer, an address, or
    /// a line's article does not exist; `RepositoryError::Database` for
    /// other failures. Nothing is persisted on error.
    pub async fn create(
        &self,
        order: &NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r"
            INSERT INTO shop_order
                (customer_id, placed_at, status, delivery_address_id, billing_address_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            ",
        )
        .bind(order.customer_id)
        .bind(order.placed_at)
        .bind(order.status.to_string())
        .bind(order.delivery_address_id)
        .bind(order.billing_address_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| crate::map_fk_violation(e, "order references a missing row"))?;

        let id: OrderId = row.try_get("id")?;

        for line in lines {
            sqlx::query(
                "INSERT INTO order_line_item (order_id, article_id, quantity) VALUES (?1, ?2, ?3)",
            )
            .bind(id)
            .bind(line.article_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| crate::map_fk_violation(e, "order line references a missing article"))?;
        }

        tx.commit().await?;

        Ok(Order {
            id,
            customer_id: order.customer_id,
            placed_at: order.placed_at,
            status: order.status,
            delivery_address_id: order.delivery_address_id,
            billing_address_id: order.billing_address_id,
        })
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, customer_id, placed_at, status, delivery_address_id, billing_address_id
            FROM shop_order
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(order_from_row).transpose()
    }

    /// List the line items of an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lines(&self, id: OrderId) -> Result<Vec<OrderLineItem>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, order_id, article_id, quantity
            FROM order_line_item
            WHERE order_id = ?1
            ORDER BY id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(line_from_row).collect()
    }

    /// Overwrite the order status. No transition rules apply.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such order exists.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE shop_order SET status = ?1 WHERE id = ?2")
            .bind(status.to_string())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an order. Its line items cascade away; articles survive.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such order exists.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop_order WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
