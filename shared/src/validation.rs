//! Validation utilities for the Climate Observation API

use chrono::NaiveDate;
use thiserror::Error;

/// The only accepted date format for path and query parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors produced while parsing a client supplied date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("time data '{input}' does not match format 'YYYY-MM-DD'")]
    Format { input: String },

    #[error("'{input}' is not a valid calendar date: {reason}")]
    OutOfRange { input: String, reason: String },
}

/// Parse a strict, zero padded `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(DateParseError::Format {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| DateParseError::OutOfRange {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parse an optional query parameter; absent stays absent
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>, DateParseError> {
    input.map(parse_date).transpose()
}

/// Round a temperature average to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
