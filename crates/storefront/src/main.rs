//! Kaufhaus Storefront - public country listing.
//!
//! This binary serves the read-only storefront surface on port 3000:
//! the country listing and a health check. All catalog writes go through
//! the CLI or direct repository use; the storefront never validates or
//! mutates catalog data.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;
mod state;

use config::StorefrontConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = kaufhaus_catalog::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    kaufhaus_catalog::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let addr = config.bind_addr();
    let state = AppState::new(pool);

    let app = Router::new()
        .route("/", get(routes::countries::index))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(%addr, "Storefront listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
