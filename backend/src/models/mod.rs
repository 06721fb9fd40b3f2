//! Database models for the Climate Observation API
//!
//! Re-exports models from the shared crate and adds the typed table records

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

pub use shared::models::*;

/// Row of the `station` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Station {
    pub id: i64,
    /// Station code, unique per station
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Row of the `measurement` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Measurement {
    pub id: i64,
    /// Code of the reporting station
    pub station: String,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: f64,
}
