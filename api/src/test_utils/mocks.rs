//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They mirror the ordering and aggregation rules of the database adapters.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    DailyPrecipitation, Observation, Station, StationId, TemperatureStats, TrailingWindow,
};
use crate::domain::ports::{ObservationRepository, StationRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Station Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: Arc<RwLock<Vec<Station>>>,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a station; insertion order stands in for primary key order
    pub fn with_station(self, station: Station) -> Self {
        self.stations.write().unwrap().push(station);
        self
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn find_all(&self) -> Result<Vec<Station>, DomainError> {
        Ok(self.stations.read().unwrap().clone())
    }
}

// ============================================================================
// In-Memory Observation Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryObservationRepository {
    observations: Arc<RwLock<Vec<Observation>>>,
    fail: bool,
}

impl InMemoryObservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observation(self, observation: Observation) -> Self {
        self.observations.write().unwrap().push(observation);
        self
    }

    /// Every query returns a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database("store unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    /// Rows in insertion order, stably sorted by date then station
    fn sorted(&self) -> Vec<Observation> {
        let mut rows = self.observations.read().unwrap().clone();
        rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.station.cmp(&b.station)));
        rows
    }
}

#[async_trait]
impl ObservationRepository for InMemoryObservationRepository {
    async fn latest_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        self.check()?;
        Ok(self.observations.read().unwrap().iter().map(|o| o.date).max())
    }

    async fn most_active_station(&self) -> Result<Option<StationId>, DomainError> {
        self.check()?;
        let mut counts: BTreeMap<StationId, usize> = BTreeMap::new();
        for o in self.observations.read().unwrap().iter() {
            *counts.entry(o.station.clone()).or_default() += 1;
        }

        // BTreeMap iterates in id order, so the first max wins ties
        let mut best: Option<(StationId, usize)> = None;
        for (station, count) in counts {
            if best.as_ref().map_or(true, |(_, c)| count > *c) {
                best = Some((station, count));
            }
        }
        Ok(best.map(|(station, _)| station))
    }

    async fn precipitation_in(
        &self,
        window: &TrailingWindow,
    ) -> Result<Vec<DailyPrecipitation>, DomainError> {
        self.check()?;
        Ok(self
            .sorted()
            .into_iter()
            .filter(|o| window.contains(o.date))
            .map(|o| DailyPrecipitation {
                date: o.date,
                prcp: o.prcp,
            })
            .collect())
    }

    async fn find_by_station_in(
        &self,
        station: &StationId,
        window: &TrailingWindow,
    ) -> Result<Vec<Observation>, DomainError> {
        self.check()?;
        Ok(self
            .sorted()
            .into_iter()
            .filter(|o| &o.station == station && window.contains(o.date))
            .collect())
    }

    async fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TemperatureStats, DomainError> {
        self.check()?;
        let temps: Vec<f64> = self
            .observations
            .read()
            .unwrap()
            .iter()
            .filter(|o| o.date >= start && end.map_or(true, |end| o.date <= end))
            .map(|o| o.tobs)
            .collect();

        if temps.is_empty() {
            return Ok(TemperatureStats::empty());
        }

        Ok(TemperatureStats {
            min: temps.iter().copied().reduce(f64::min),
            avg: Some(temps.iter().sum::<f64>() / temps.len() as f64),
            max: temps.iter().copied().reduce(f64::max),
        })
    }
}
