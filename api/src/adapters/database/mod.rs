//! Database adapters
//!
//! Implementations of repository traits using SeaORM. Any backend SeaORM
//! is built with (SQLite, PostgreSQL) works against the same entities.

pub mod observation_repo;
pub mod schema;
pub mod station_repo;

pub use observation_repo::DatabaseObservationRepository;
pub use schema::verify_schema;
pub use station_repo::DatabaseStationRepository;
