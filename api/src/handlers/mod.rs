//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod climate;

pub use climate::{precipitation, stations, stats_between, stats_from, tobs, welcome};
