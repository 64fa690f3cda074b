//! Entity records for the catalog.
//!
//! Each entity comes in two shapes: the persisted record carrying its ID
//! (e.g. [`Article`]) and an insertable record without one (e.g.
//! [`NewArticle`]). Repositories in `kaufhaus-catalog` accept the `New*`
//! shape and return the persisted one.

pub mod address;
pub mod article;
pub mod availability;
pub mod customer;
pub mod feedback;
pub mod order;

pub use address::{Address, Country, NewAddress, NewCountry};
pub use article::{
    Article, ArticleKind, ArticleVariant, BookDetails, MovieDetails, NewArticle,
};
pub use availability::{Availability, NewAvailability};
pub use customer::{Customer, NewCustomer};
pub use feedback::{Feedback, FeedbackSubject, NewFeedback, SubjectKind};
pub use order::{NewOrder, NewOrderLine, Order, OrderLineItem};
