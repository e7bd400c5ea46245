//! SeaORM entities
//!
//! Static declarations of the two tables in the climate store. The layout
//! matches the reference `hawaii.sqlite` database.

pub mod measurement;
pub mod station;
