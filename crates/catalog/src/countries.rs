//! Country repository.

use sqlx::{Row, SqlitePool};

use kaufhaus_core::{Country, CountryId, NewCountry};

use crate::{RepositoryError, map_fk_violation};

/// Repository for country database operations.
pub struct CountryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CountryRepository<'a> {
    /// Create a new country repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a country.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, country: &NewCountry) -> Result<Country, RepositoryError> {
        let row = sqlx::query("INSERT INTO country (name) VALUES (?1) RETURNING id")
            .bind(&country.name)
            .fetch_one(self.pool)
            .await?;

        Ok(Country {
            id: row.try_get("id")?,
            name: country.name.clone(),
        })
    }

    /// Get a country by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CountryId) -> Result<Option<Country>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM country WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(Country {
                id: r.try_get("id")?,
                name: r.try_get("name")?,
            })),
            None => Ok(None),
        }
    }

    /// List all countries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Country>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name FROM country ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        rows.into_iter()
            .map(|r| {
                Ok(Country {
                    id: r.try_get("id")?,
                    name: r.try_get("name")?,
                })
            })
            .collect()
    }

    /// Rename a country.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such country exists.
    pub async fn rename(&self, id: CountryId, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE country SET name = ?1 WHERE id = ?2")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a country.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` while any address still
    /// references the country (delete-protection), and
    /// `RepositoryError::NotFound` if no such country exists.
    pub async fn delete(&self, id: CountryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM country WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| map_fk_violation(e, "country is still referenced by an address"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
