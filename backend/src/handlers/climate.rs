//! HTTP handlers for precipitation, station and temperature endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{
    parse_date, parse_optional_date, DateBounds, PrecipitationReading, StationSummary,
    TemperatureAggregate, TemperatureObservation,
};

use crate::error::AppResult;
use crate::services::ClimateService;
use crate::AppState;

/// Precipitation for the last year of data
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PrecipitationReading>>> {
    let service = ClimateService::new(state.db);
    let readings = service.precipitation(&state.window).await?;
    Ok(Json(readings))
}

/// List all stations
pub async fn list_stations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StationSummary>>> {
    let service = ClimateService::new(state.db);
    let stations = service.stations().await?;
    Ok(Json(stations))
}

/// Temperature observations for the last year of data
pub async fn get_temperature_observations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TemperatureObservation>>> {
    let service = ClimateService::new(state.db);
    let observations = service.temperature_observations(&state.window).await?;
    Ok(Json(observations))
}

/// Temperature summary from a start date onwards
pub async fn get_summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> AppResult<Json<Vec<TemperatureAggregate>>> {
    let bounds = DateBounds::from_start(parse_date(&start)?);

    let service = ClimateService::new(state.db);
    let summary = service.temperature_summary(&bounds).await?;
    Ok(Json(summary))
}

/// Temperature summary between two dates, both inclusive
pub async fn get_summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> AppResult<Json<Vec<TemperatureAggregate>>> {
    let bounds = DateBounds::between(parse_date(&start)?, parse_date(&end)?);

    let service = ClimateService::new(state.db);
    let summary = service.temperature_summary(&bounds).await?;
    Ok(Json(summary))
}

/// Query parameters for the summary search
#[derive(Debug, Deserialize)]
pub struct SummarySearchQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Temperature summary with optional bounds
pub async fn search_summary(
    State(state): State<AppState>,
    Query(query): Query<SummarySearchQuery>,
) -> AppResult<Json<Vec<TemperatureAggregate>>> {
    let bounds = DateBounds {
        start: parse_optional_date(query.start.as_deref())?,
        end: parse_optional_date(query.end.as_deref())?,
    };

    let service = ClimateService::new(state.db);
    let summary = service.temperature_summary(&bounds).await?;
    Ok(Json(summary))
}
