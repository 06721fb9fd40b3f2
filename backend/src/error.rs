//! Error handling for the Climate Observation API
//!
//! Every failure is rendered as `{"status": "failure", "error": "..."}`.
//! Client date errors keep HTTP 200.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::DateParseError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Failure envelope returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureResponse {
    pub status: String,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "failure".to_string(),
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidDate(err) => {
                tracing::debug!("Rejected date parameter: {}", err);
                (StatusCode::OK, err.to_string())
            }
            AppError::DatabaseError(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
        };

        (status, Json(FailureResponse::new(message))).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
