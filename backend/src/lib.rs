//! Climate Observation API - Backend Library
//!
//! Read-only HTTP endpoints over a pre-populated SQLite dataset of
//! precipitation and temperature readings from weather stations.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use chrono::NaiveDate;
use shared::ReportingWindow;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    /// Fixed "last year" window, computed once at startup
    pub window: ReportingWindow,
    /// Newest date in the dataset when the server started
    pub latest_date: Option<NaiveDate>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config, latest_date: Option<NaiveDate>) -> Self {
        let window = config.window();
        Self {
            db,
            config: Arc::new(config),
            window,
            latest_date,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .merge(routes::climate_routes())
        .nest("/api/v1.0", routes::climate_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
