//! Repository port traits
//!
//! These traits define the read interface over the climate store.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite or PostgreSQL).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{
    DailyPrecipitation, Observation, Station, StationId, TemperatureStats, TrailingWindow,
};
use crate::error::DomainError;

/// Repository for Station reference data
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// All stations in the store's primary key order
    async fn find_all(&self) -> Result<Vec<Station>, DomainError>;
}

/// Repository for Observation rows
#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Latest observation date in the store, `None` when it holds no rows
    async fn latest_date(&self) -> Result<Option<NaiveDate>, DomainError>;

    /// Station with the most observations; ties go to the smallest identifier
    async fn most_active_station(&self) -> Result<Option<StationId>, DomainError>;

    /// Daily precipitation inside the window, ordered by date then station
    async fn precipitation_in(
        &self,
        window: &TrailingWindow,
    ) -> Result<Vec<DailyPrecipitation>, DomainError>;

    /// Observations of one station inside the window, ordered by date
    async fn find_by_station_in(
        &self,
        station: &StationId,
        window: &TrailingWindow,
    ) -> Result<Vec<Observation>, DomainError>;

    /// Min/avg/max temperature over `date >= start` (and `date <= end` when given)
    async fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TemperatureStats, DomainError>;
}
