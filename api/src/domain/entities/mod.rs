//! Domain entities
//!
//! Pure domain models for the climate dataset.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod observation;
pub mod station;

pub use observation::{
    parse_date, DailyPrecipitation, Observation, TemperatureStats, TrailingWindow,
};
pub use station::{Station, StationId};
