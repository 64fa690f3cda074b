//! Articles and their variants.
//!
//! An article is either a plain article, a movie, or a book. The variants
//! share identity with the base article: storage keeps a base `article` row
//! plus a satellite row per variant, keyed by the article ID. In code the
//! variant is a tagged payload on the article record rather than a separate
//! entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ArticleId;

/// Discriminant for the article variant, as stored in the `kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArticleKind {
    #[default]
    Plain,
    Movie,
    Book,
}

impl std::fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Movie => write!(f, "movie"),
            Self::Book => write!(f, "book"),
        }
    }
}

impl std::str::FromStr for ArticleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "movie" => Ok(Self::Movie),
            "book" => Ok(Self::Book),
            _ => Err(format!("invalid article kind: {s}")),
        }
    }
}

/// Extension fields for movie articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    /// Runtime in minutes.
    pub duration_minutes: i32,
}

/// Extension fields for book articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub author: String,
    pub publisher: String,
    pub page_count: i32,
    pub isbn: String,
}

/// Variant payload of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArticleVariant {
    /// No extension fields.
    Plain,
    /// Movie extension fields.
    Movie(MovieDetails),
    /// Book extension fields.
    Book(BookDetails),
}

impl ArticleVariant {
    /// The discriminant stored alongside the base article row.
    #[must_use]
    pub const fn kind(&self) -> ArticleKind {
        match self {
            Self::Plain => ArticleKind::Plain,
            Self::Movie(_) => ArticleKind::Movie,
            Self::Book(_) => ArticleKind::Book,
        }
    }
}

/// A sellable article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique article ID, shared with any variant payload row.
    pub id: ArticleId,
    /// Short description.
    pub description: String,
    /// Unit price. Must be positive; checked by
    /// [`validate_article`](crate::validate::validate_article), which callers
    /// invoke explicitly before persisting.
    pub price: Decimal,
    /// Units currently available (non-negative).
    pub units_available: i32,
    /// Free-text info.
    pub info: String,
    /// Variant payload (plain, movie, or book).
    pub variant: ArticleVariant,
}

/// Insertable article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub description: String,
    pub price: Decimal,
    pub units_available: i32,
    pub info: String,
    pub variant: ArticleVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_kind_matches_payload() {
        assert_eq!(ArticleVariant::Plain.kind(), ArticleKind::Plain);

        let movie = ArticleVariant::Movie(MovieDetails {
            director: "Wolfgang Petersen".to_string(),
            release_year: 1981,
            genre: "War".to_string(),
            duration_minutes: 149,
        });
        assert_eq!(movie.kind(), ArticleKind::Movie);
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [ArticleKind::Plain, ArticleKind::Movie, ArticleKind::Book] {
            let parsed: ArticleKind = kind.to_string().parse().expect("parse");
            assert_eq!(parsed, kind);
        }
    }
}
