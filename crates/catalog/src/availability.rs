//! Availability repository.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kaufhaus_core::{ArticleId, Availability, AvailabilityId, CountryId, NewAvailability};

use crate::{RepositoryError, parse_decimal};

fn availability_from_row(r: &SqliteRow) -> Result<Availability, RepositoryError> {
    Ok(Availability {
        id: r.try_get("id")?,
        country_id: r.try_get("country_id")?,
        article_id: r.try_get("article_id")?,
        tax_rate: parse_decimal(r.try_get::<&str, _>("tax_rate")?, "availability.tax_rate")?,
    })
}

/// Repository for availability database operations.
pub struct AvailabilityRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AvailabilityRepository<'a> {
    /// Create a new availability repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an availability link.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the country or article does
    /// not exist, `RepositoryError::Database` for other failures.
    pub async fn create(
        &self,
        availability: &NewAvailability,
    ) -> Result<Availability, RepositoryError> {
        let row = sqlx::query(
            r"
            INSERT INTO availability (country_id, article_id, tax_rate)
            VALUES (?1, ?2, ?3)
            RETURNING id
            ",
        )
        .bind(availability.country_id)
        .bind(availability.article_id)
        .bind(availability.tax_rate.to_string())
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::map_fk_violation(e, "availability references a missing row"))?;

        Ok(Availability {
            id: row.try_get("id")?,
            country_id: availability.country_id,
            article_id: availability.article_id,
            tax_rate: availability.tax_rate,
        })
    }

    /// Get an availability link by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: AvailabilityId) -> Result<Option<Availability>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, country_id, article_id, tax_rate FROM availability WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(availability_from_row).transpose()
    }

    /// List the countries an article is sellable in.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_article(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<Availability>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, country_id, article_id, tax_rate
            FROM availability
            WHERE article_id = ?1
            ORDER BY id
            ",
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(availability_from_row).collect()
    }

    /// List the articles sellable in a country.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_country(
        &self,
        country_id: CountryId,
    ) -> Result<Vec<Availability>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, country_id, article_id, tax_rate
            FROM availability
            WHERE country_id = ?1
            ORDER BY id
            ",
        )
        .bind(country_id)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(availability_from_row).collect()
    }

    /// Update the tax rate of an availability link.
    ///
    /// Note that this does NOT validate the new rate; callers invoke
    /// `validate_availability` themselves if they want the positive-rate
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such link exists.
    pub async fn set_tax_rate(
        &self,
        id: AvailabilityId,
        tax_rate: rust_decimal::Decimal,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE availability SET tax_rate = ?1 WHERE id = ?2")
            .bind(tax_rate.to_string())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an availability link.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such link exists.
    pub async fn delete(&self, id: AvailabilityId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM availability WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
