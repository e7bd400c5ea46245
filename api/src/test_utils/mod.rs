//! Test utilities
//!
//! In-memory repository implementations and test fixtures for unit testing
//! the application layer without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
