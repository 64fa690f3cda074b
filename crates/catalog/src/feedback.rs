//! Feedback repository.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use kaufhaus_core::{ArticleId, Feedback, FeedbackId, FeedbackSubject, NewFeedback, SubjectKind};

use crate::{RepositoryError, parse_stored};

fn feedback_from_row(r: &SqliteRow) -> Result<Feedback, RepositoryError> {
    let kind: SubjectKind = parse_stored(
        r.try_get::<&str, _>("subject_kind")?,
        "feedback.subject_kind",
    )?;

    Ok(Feedback {
        id: r.try_get("id")?,
        subject: FeedbackSubject {
            kind,
            id: r.try_get("subject_id")?,
        },
        customer_id: r.try_get("customer_id")?,
        article_id: r.try_get("article_id")?,
        created_at: r.try_get("created_at")?,
        comment: r.try_get("comment")?,
    })
}

/// Repository for feedback database operations.
pub struct FeedbackRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FeedbackRepository<'a> {
    /// Create a new feedback repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a piece of feedback.
    ///
    /// The generic subject pair is stored as-is; only the customer and
    /// article references are constrained by the schema.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the customer or article does
    /// not exist, `RepositoryError::Database` for other failures.
    pub async fn create(&self, feedback: &NewFeedback) -> Result<Feedback, RepositoryError> {
        let row = sqlx::query(
            r"
            INSERT INTO feedback (subject_kind, subject_id, customer_id, article_id, created_at, comment)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            ",
        )
        .bind(feedback.subject.kind.to_string())
        .bind(feedback.subject.id)
        .bind(feedback.customer_id)
        .bind(feedback.article_id)
        .bind(feedback.created_at)
        .bind(&feedback.comment)
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::map_fk_violation(e, "feedback references a missing row"))?;

        Ok(Feedback {
            id: row.try_get("id")?,
            subject: feedback.subject,
            customer_id: feedback.customer_id,
            article_id: feedback.article_id,
            created_at: feedback.created_at,
            comment: feedback.comment.clone(),
        })
    }

    /// Get a piece of feedback by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: FeedbackId) -> Result<Option<Feedback>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, subject_kind, subject_id, customer_id, article_id, created_at, comment
            FROM feedback
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(feedback_from_row).transpose()
    }

    /// List feedback left for an article, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_article(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, subject_kind, subject_id, customer_id, article_id, created_at, comment
            FROM feedback
            WHERE article_id = ?1
            ORDER BY created_at DESC
            ",
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(feedback_from_row).collect()
    }

    /// Rewrite the comment of a piece of feedback.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such feedback exists.
    pub async fn update_comment(
        &self,
        id: FeedbackId,
        comment: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE feedback SET comment = ?1 WHERE id = ?2")
            .bind(comment)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a piece of feedback.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such feedback exists.
    pub async fn delete(&self, id: FeedbackId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
