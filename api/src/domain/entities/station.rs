//! Station domain entity
//!
//! A fixed weather-reporting location. Stations are reference data and are
//! never modified by this service.

use serde::Serialize;

/// Station identifier code (e.g. `USC00519281`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(pub String);

impl StationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weather station with its location metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    /// Location metadata is loaded with the row but no route returns it yet
    #[allow(dead_code)]
    pub name: String,
    #[allow(dead_code)]
    pub latitude: f64,
    #[allow(dead_code)]
    pub longitude: f64,
    /// Elevation as recorded in the dataset (no unit conversion)
    #[allow(dead_code)]
    pub elevation: f64,
}
