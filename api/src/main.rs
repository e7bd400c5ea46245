//! Climate API Server
//!
//! Read-only HTTP API over a store of weather stations and daily observations.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{verify_schema, DatabaseObservationRepository, DatabaseStationRepository};
use app::{ClimateService, ReferencePins};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub climate_service:
        Arc<ClimateService<DatabaseStationRepository, DatabaseObservationRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every route and middleware layer
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(health))
        // Static routes take priority over the :start capture
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        .route("/api/v1.0/:start", get(handlers::stats_from))
        .route("/api/v1.0/:start/:end", get(handlers::stats_between))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,climate_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Climate API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;

    // Connect to the climate store
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let summary = verify_schema(&db)
        .await
        .context("Database does not match the expected schema")?;
    tracing::info!(
        "Database connected: {} stations, {} observations",
        summary.stations,
        summary.observations
    );

    if let Some(date) = config.latest_date {
        tracing::info!("Latest date pinned to {}", date);
    }
    if let Some(ref station) = config.most_active_station {
        tracing::info!("Most active station pinned to {}", station);
    }

    // Create adapters
    let station_repo = Arc::new(DatabaseStationRepository::new(db.clone()));
    let observation_repo = Arc::new(DatabaseObservationRepository::new(db.clone()));

    // Create application services
    let climate_service = Arc::new(
        ClimateService::new(station_repo, observation_repo).with_pins(ReferencePins {
            latest_date: config.latest_date,
            most_active_station: config.most_active_station.clone(),
        }),
    );

    let app = build_router(AppState { climate_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await.context("Failed to close database")?;
    tracing::info!("Database connection closed");

    Ok(())
}
