//! Domain models for the Climate Observation API

mod observation;
mod station;

pub use observation::*;
pub use station::*;
