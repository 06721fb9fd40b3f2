//! Station models

use serde::{Deserialize, Serialize};

/// A station as listed by the `/stations` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct StationSummary {
    /// Station code, e.g. `USC00519397`
    pub station: String,
    pub name: String,
}
