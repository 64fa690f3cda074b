//! Address repository.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kaufhaus_core::{Address, AddressId, NewAddress};

use crate::RepositoryError;

fn address_from_row(r: &SqliteRow) -> Result<Address, RepositoryError> {
    Ok(Address {
        id: r.try_get("id")?,
        street: r.try_get("street")?,
        house_number: r.try_get("house_number")?,
        postal_code: r.try_get("postal_code")?,
        city: r.try_get("city")?,
        country_id: r.try_get("country_id")?,
    })
}

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the referenced country does
    /// not exist, `RepositoryError::Database` for other failures.
    pub async fn create(&self, address: &NewAddress) -> Result<Address, RepositoryError> {
        let row = sqlx::query(
            r"
            INSERT INTO address (street, house_number, postal_code, city, country_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            ",
        )
        .bind(&address.street)
        .bind(address.house_number)
        .bind(&address.postal_code)
        .bind(&address.city)
        .bind(address.country_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::map_fk_violation(e, "address references a missing country"))?;

        Ok(Address {
            id: row.try_get("id")?,
            street: address.street.clone(),
            house_number: address.house_number,
            postal_code: address.postal_code.clone(),
            city: address.city.clone(),
            country_id: address.country_id,
        })
    }

    /// Get an address by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, street, house_number, postal_code, city, country_id
            FROM address
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(address_from_row).transpose()
    }

    /// List all addresses in a country.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_in_country(
        &self,
        country_id: kaufhaus_core::CountryId,
    ) -> Result<Vec<Address>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, street, house_number, postal_code, city, country_id
            FROM address
            WHERE country_id = ?1
            ORDER BY id
            ",
        )
        .bind(country_id)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(address_from_row).collect()
    }

    /// Overwrite all fields of an address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the new country does not
    /// exist, `RepositoryError::NotFound` if no such address exists.
    pub async fn update(
        &self,
        id: AddressId,
        address: &NewAddress,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE address
            SET street = ?1, house_number = ?2, postal_code = ?3, city = ?4, country_id = ?5
            WHERE id = ?6
            ",
        )
        .bind(&address.street)
        .bind(address.house_number)
        .bind(&address.postal_code)
        .bind(&address.city)
        .bind(address.country_id)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| crate::map_fk_violation(e, "address references a missing country"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an address. Customers and orders referencing it cascade away.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such address exists.
    pub async fn delete(&self, id: AddressId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM address WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
