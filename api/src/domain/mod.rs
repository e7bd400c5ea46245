//! Domain layer
//!
//! Contains the climate data model with no external dependencies.
//! - `entities`: Domain models for stations and observations
//! - `ports`: Trait definitions for the data store

pub mod entities;
pub mod ports;
