//! Customer repository.

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kaufhaus_core::{Customer, CustomerId, NewCustomer};

use crate::RepositoryError;

fn customer_from_row(r: &SqliteRow) -> Result<Customer, RepositoryError> {
    Ok(Customer {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        password: r.try_get("password")?,
        email: r.try_get("email")?,
        address_id: r.try_get("address_id")?,
        last_online: r.try_get("last_online")?,
    })
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the referenced address does
    /// not exist, `RepositoryError::Database` for other failures.
    pub async fn create(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        let row = sqlx::query(
            r"
            INSERT INTO customer (name, password, email, address_id, last_online)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            ",
        )
        .bind(&customer.name)
        .bind(&customer.password)
        .bind(&customer.email)
        .bind(customer.address_id)
        .bind(customer.last_online)
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::map_fk_violation(e, "customer references a missing address"))?;

        Ok(Customer {
            id: row.try_get("id")?,
            name: customer.name.clone(),
            password: customer.password.clone(),
            email: customer.email.clone(),
            address_id: customer.address_id,
            last_online: customer.last_online,
        })
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, name, password, email, address_id, last_online
            FROM customer
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(customer_from_row).transpose()
    }

    /// List all customers in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, name, password, email, address_id, last_online
            FROM customer
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(customer_from_row).collect()
    }

    /// Overwrite all fields of a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the new address does not
    /// exist, `RepositoryError::NotFound` if no such customer exists.
    pub async fn update(
        &self,
        id: CustomerId,
        customer: &NewCustomer,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE customer
            SET name = ?1, password = ?2, email = ?3, address_id = ?4, last_online = ?5
            WHERE id = ?6
            ",
        )
        .bind(&customer.name)
        .bind(&customer.password)
        .bind(&customer.email)
        .bind(customer.address_id)
        .bind(customer.last_online)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| crate::map_fk_violation(e, "customer references a missing address"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Record when the customer was last online.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such customer exists.
    pub async fn set_last_online(
        &self,
        id: CustomerId,
        last_online: NaiveDate,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE customer SET last_online = ?1 WHERE id = ?2")
            .bind(last_online)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a customer. Their orders and feedback cascade away.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such customer exists.
    pub async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customer WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
