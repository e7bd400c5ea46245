//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod database;

pub use database::{verify_schema, DatabaseObservationRepository, DatabaseStationRepository};
