//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{parse_date, Observation, Station, StationId};

/// Create a test station with placeholder metadata
pub fn test_station(id: &str) -> Station {
    Station {
        id: StationId::from(id),
        name: format!("{} station, HI US", id),
        latitude: 21.3331,
        longitude: -157.8025,
        elevation: 152.4,
    }
}

/// Create an observation from a `YYYY-MM-DD` date
pub fn observation(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Observation {
    Observation {
        station: StationId::from(station),
        date: parse_date(date).expect("fixture date must be YYYY-MM-DD"),
        prcp,
        tobs,
    }
}
