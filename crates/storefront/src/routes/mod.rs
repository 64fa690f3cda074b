//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - Country listing
//! GET  /health    - Health check
//! ```

pub mod countries;

use axum::http::StatusCode;

/// Health check endpoint.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
