//! Common types used across the platform

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days covered by the "last year" endpoints
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Reference date of the bundled dataset. The window is anchored here rather
/// than on the newest row in the measurement table.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 8, 23).unwrap_or_default()
}

/// Fixed window used by `/precipitation` and `/tobs`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportingWindow {
    pub reference_date: NaiveDate,
    /// Exclusive lower bound: rows must be strictly after this date
    pub cutoff_date: NaiveDate,
}

impl ReportingWindow {
    pub fn new(reference_date: NaiveDate, window_days: i64) -> Self {
        Self {
            reference_date,
            cutoff_date: reference_date - Duration::days(window_days),
        }
    }
}

impl Default for ReportingWindow {
    fn default() -> Self {
        Self::new(default_reference_date(), DEFAULT_WINDOW_DAYS)
    }
}

/// Optional inclusive date bounds for temperature aggregate queries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    pub fn from_start(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when both bounds are set and no date can satisfy them
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }
}
