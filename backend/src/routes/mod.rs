//! Route definitions for the Climate Observation API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create the climate routes. Mounted at the root and under `/api/v1.0`.
pub fn climate_routes() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(handlers::get_precipitation))
        .route("/stations", get(handlers::list_stations))
        .route("/tobs", get(handlers::get_temperature_observations))
        .route("/search_type", get(handlers::search_summary))
        // Static segments above win over these captures
        .route("/:start", get(handlers::get_summary_from))
        .route("/:start/:end", get(handlers::get_summary_between))
}
