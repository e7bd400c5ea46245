//! Observation domain entity
//!
//! One dated weather reading tied to a station, plus the value types derived
//! from sets of readings (trailing window, temperature statistics).

use chrono::{Duration, NaiveDate};
use serde::{Serialize, Serializer};

use super::station::StationId;

/// Date format accepted in request paths and emitted in responses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date. Anything else yields `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// A single daily reading from one station
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    #[allow(dead_code)]
    pub station: StationId,
    #[allow(dead_code)]
    pub date: NaiveDate,
    /// Precipitation, missing on days the gauge did not report
    #[allow(dead_code)]
    pub prcp: Option<f64>,
    /// Temperature observation in degrees
    pub tobs: f64,
}

/// Precipitation reported on a single day by one station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// The 365-day period ending at the dataset's latest known date.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TrailingWindow {
    pub const DAYS: i64 = 365;

    /// Window ending at `latest` and starting 365 days earlier
    pub fn ending_at(latest: NaiveDate) -> Self {
        Self {
            start: latest - Duration::days(Self::DAYS),
            end: latest,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Minimum, average and maximum temperature over a set of observations.
///
/// Serializes as a three element array `[min, avg, max]`; every element is
/// `null` when no observation matched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// Stats for an empty selection
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl Serialize for TemperatureStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.avg, self.max].serialize(serializer)
    }
}
