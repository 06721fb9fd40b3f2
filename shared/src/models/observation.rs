//! Observation models returned by the measurement endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::round_to_hundredths;

/// Precipitation for one date within the reporting window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecipitationReading {
    pub date: NaiveDate,
    /// Missing readings are reported as `null`
    pub prcp: Option<f64>,
}

/// Temperature observation for one date within the reporting window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureObservation {
    pub date: NaiveDate,
    pub tob: f64,
}

/// Per-date temperature statistics in degrees Fahrenheit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureAggregate {
    pub date: NaiveDate,
    #[serde(rename = "min (°F)")]
    pub min: f64,
    #[serde(rename = "avg (°F)")]
    pub avg: f64,
    #[serde(rename = "max (°F)")]
    pub max: f64,
}

impl TemperatureAggregate {
    /// Build an aggregate from raw query output. Only the average is rounded.
    pub fn new(date: NaiveDate, min: f64, avg: f64, max: f64) -> Self {
        Self {
            date,
            min,
            avg: round_to_hundredths(avg),
            max,
        }
    }
}
