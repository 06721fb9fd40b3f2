//! Shared types and models for the Climate Observation API
//!
//! This crate contains the response shapes, reporting window and date
//! validation used by the backend and its tests. It performs no I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
