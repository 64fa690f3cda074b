//! Country listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use kaufhaus_catalog::CountryRepository;
use kaufhaus_core::Country;

use crate::error::AppError;
use crate::state::AppState;

/// Country listing template.
#[derive(Template, WebTemplate)]
#[template(path = "countries.html")]
pub struct CountriesTemplate {
    /// All countries, in insertion order.
    pub countries: Vec<Country>,
}

/// Display all countries, name only.
///
/// # Errors
///
/// Returns `AppError::Database` if the listing query fails.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CountriesTemplate, AppError> {
    let countries = CountryRepository::new(state.pool()).list().await?;

    Ok(CountriesTemplate { countries })
}
