//! Customer feedback.
//!
//! Feedback carries a generic subject reference - a (kind, id) pair that can
//! point at a row of any entity kind - in addition to the explicit customer
//! and article references. The pair replaces a content-type based generic
//! foreign key and intentionally carries no storage-level constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ArticleId, CustomerId, FeedbackId};

/// Entity kinds a feedback subject may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Country,
    Address,
    Customer,
    Article,
    Order,
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Country => write!(f, "country"),
            Self::Address => write!(f, "address"),
            Self::Customer => write!(f, "customer"),
            Self::Article => write!(f, "article"),
            Self::Order => write!(f, "order"),
        }
    }
}

impl std::str::FromStr for SubjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(Self::Country),
            "address" => Ok(Self::Address),
            "customer" => Ok(Self::Customer),
            "article" => Ok(Self::Article),
            "order" => Ok(Self::Order),
            _ => Err(format!("invalid subject kind: {s}")),
        }
    }
}

/// A generic reference to a row of any entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubject {
    /// Which entity kind the ID refers to.
    pub kind: SubjectKind,
    /// Raw row ID of the subject.
    pub id: i64,
}

/// A piece of customer feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique feedback ID.
    pub id: FeedbackId,
    /// Generic subject this feedback is about.
    pub subject: FeedbackSubject,
    /// The reviewing customer (cascade-delete).
    pub customer_id: CustomerId,
    /// The reviewed article (cascade-delete).
    pub article_id: ArticleId,
    /// When the feedback was left.
    pub created_at: DateTime<Utc>,
    /// Free-text rating/comment.
    pub comment: String,
}

/// Insertable feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub subject: FeedbackSubject,
    pub customer_id: CustomerId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_kind_round_trips_through_str() {
        for kind in [
            SubjectKind::Country,
            SubjectKind::Address,
            SubjectKind::Customer,
            SubjectKind::Article,
            SubjectKind::Order,
        ] {
            let parsed: SubjectKind = kind.to_string().parse().expect("parse");
            assert_eq!(parsed, kind);
        }
    }
}
