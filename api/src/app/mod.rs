//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod climate_service;

pub use climate_service::{ClimateService, ReferencePins};
