//! Article repository.
//!
//! Variant payloads (movie, book) live in satellite tables keyed by the
//! article ID. Creating an article with a payload inserts both rows in one
//! transaction; reading joins them back into a single record.

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kaufhaus_core::{
    Article, ArticleId, ArticleKind, ArticleVariant, BookDetails, MovieDetails, NewArticle,
};

use crate::{RepositoryError, parse_decimal, parse_stored};

fn article_from_row(r: &SqliteRow) -> Result<Article, RepositoryError> {
    let id: ArticleId = r.try_get("id")?;
    let kind: ArticleKind = parse_stored(r.try_get::<&str, _>("kind")?, "article.kind")?;

    let variant = match kind {
        ArticleKind::Plain => ArticleVariant::Plain,
        ArticleKind::Movie => {
            let director: Option<String> = r.try_get("director")?;
            let director = director.ok_or_else(|| {
                RepositoryError::DataCorruption(format!("missing movie row for article {id}"))
            })?;
            ArticleVariant::Movie(MovieDetails {
                director,
                release_year: r.try_get("release_year")?,
                genre: r.try_get("genre")?,
                duration_minutes: r.try_get("duration_minutes")?,
            })
        }
        ArticleKind::Book => {
            let author: Option<String> = r.try_get("author")?;
            let author = author.ok_or_else(|| {
                RepositoryError::DataCorruption(format!("missing book row for article {id}"))
            })?;
            ArticleVariant::Book(BookDetails {
                author,
                publisher: r.try_get("publisher")?,
                page_count: r.try_get("page_count")?,
                isbn: r.try_get("isbn")?,
            })
        }
    };

    Ok(Article {
        id,
        description: r.try_get("description")?,
        price: parse_decimal(r.try_get::<&str, _>("price")?, "article.price")?,
        units_available: r.try_get("units_available")?,
        info: r.try_get("info")?,
        variant,
    })
}

const SELECT_ARTICLE: &str = r"
    SELECT a.id, a.description, a.price, a.units_available, a.info, a.kind,
           m.director, m.release_year, m.genre, m.duration_minutes,
           b.author, b.publisher, b.page_count, b.isbn
    FROM article a
    LEFT JOIN movie m ON m.article_id = a.id
    LEFT JOIN book b ON b.article_id = a.id
";

/// Repository for article database operations.
pub struct ArticleRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ArticleRepository<'a> {
    /// Create a new article repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an article together with its variant payload.
    ///
    /// Both rows are written in one transaction so a movie or book can
    /// never exist without its base article row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn create(&self, article: &NewArticle) -> Result<Article, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r"
            INSERT INTO article (description, price, units_available, info, kind)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            ",
        )
        .bind(&article.description)
        .bind(article.price.to_string())
        .bind(article.units_available)
        .bind(&article.info)
        .bind(article.variant.kind().to_string())
        .fetch_one(&mut *tx)
        .await?;

        let id: ArticleId = row.try_get("id")?;

        match &article.variant {
            ArticleVariant::Plain => {}
            ArticleVariant::Movie(movie) => {
                sqlx::query(
                    r"
                    INSERT INTO movie (article_id, director, release_year, genre, duration_minutes)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    ",
                )
                .bind(id)
                .bind(&movie.director)
                .bind(movie.release_year)
                .bind(&movie.genre)
                .bind(movie.duration_minutes)
                .execute(&mut *tx)
                .await?;
            }
            ArticleVariant::Book(book) => {
                sqlx::query(
                    r"
                    INSERT INTO book (article_id, author, publisher, page_count, isbn)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    ",
                )
                .bind(id)
                .bind(&book.author)
                .bind(&book.publisher)
                .bind(book.page_count)
                .bind(&book.isbn)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(Article {
            id,
            description: article.description.clone(),
            price: article.price,
            units_available: article.units_available,
            info: article.info.clone(),
            variant: article.variant.clone(),
        })
    }

    /// Get an article by ID, variant payload included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the stored kind has no
    /// matching payload row, `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ArticleId) -> Result<Option<Article>, RepositoryError> {
        let query = format!("{SELECT_ARTICLE} WHERE a.id = ?1");
        let row = sqlx::query(&query).bind(id).fetch_optional(self.pool).await?;

        row.as_ref().map(article_from_row).transpose()
    }

    /// List all articles in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Article>, RepositoryError> {
        let query = format!("{SELECT_ARTICLE} ORDER BY a.id");
        let rows = sqlx::query(&query).fetch_all(self.pool).await?;

        rows.iter().map(article_from_row).collect()
    }

    /// Update an article's price.
    ///
    /// Note that this does NOT validate the new price; callers invoke
    /// `validate_article` themselves if they want the positive-price rule.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such article exists.
    pub async fn set_price(&self, id: ArticleId, price: Decimal) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE article SET price = ?1 WHERE id = ?2")
            .bind(price.to_string())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Update an article's available unit count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such article exists.
    pub async fn set_units_available(
        &self,
        id: ArticleId,
        units_available: i32,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE article SET units_available = ?1 WHERE id = ?2")
            .bind(units_available)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an article. Variant payload, availability, feedback and order
    /// lines cascade away; orders themselves survive.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such article exists.
    pub async fn delete(&self, id: ArticleId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM article WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
