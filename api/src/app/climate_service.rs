//! Climate query service
//!
//! Answers the five read queries of the API. The trailing window and the
//! most active station are derived from the data on every request unless a
//! reference value has been pinned through configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{parse_date, StationId, TemperatureStats, TrailingWindow};
use crate::domain::ports::{ObservationRepository, StationRepository};
use crate::error::AppError;

/// Reference values that override what the store would report
#[derive(Debug, Clone, Default)]
pub struct ReferencePins {
    pub latest_date: Option<NaiveDate>,
    pub most_active_station: Option<StationId>,
}

/// Service for querying stations and observations
pub struct ClimateService<SR, OR>
where
    SR: StationRepository,
    OR: ObservationRepository,
{
    stations: Arc<SR>,
    observations: Arc<OR>,
    pins: ReferencePins,
}

impl<SR, OR> ClimateService<SR, OR>
where
    SR: StationRepository,
    OR: ObservationRepository,
{
    pub fn new(stations: Arc<SR>, observations: Arc<OR>) -> Self {
        Self {
            stations,
            observations,
            pins: ReferencePins::default(),
        }
    }

    pub fn with_pins(mut self, pins: ReferencePins) -> Self {
        self.pins = pins;
        self
    }

    /// Trailing window ending at the latest known date.
    ///
    /// `None` when no date is pinned and the store holds no observations.
    pub async fn trailing_window(&self) -> Result<Option<TrailingWindow>, AppError> {
        let latest = match self.pins.latest_date {
            Some(date) => Some(date),
            None => self.observations.latest_date().await?,
        };

        Ok(latest.map(TrailingWindow::ending_at))
    }

    /// Station with the highest observation count, or the pinned one
    pub async fn most_active_station(&self) -> Result<Option<StationId>, AppError> {
        if let Some(ref station) = self.pins.most_active_station {
            return Ok(Some(station.clone()));
        }

        Ok(self.observations.most_active_station().await?)
    }

    /// Precipitation per day over the trailing window.
    ///
    /// Several stations reporting the same day collapse to one entry; the
    /// last row in date/station order wins.
    pub async fn precipitation_summary(
        &self,
    ) -> Result<BTreeMap<NaiveDate, Option<f64>>, AppError> {
        let Some(window) = self.trailing_window().await? else {
            return Ok(BTreeMap::new());
        };

        let readings = self.observations.precipitation_in(&window).await?;
        tracing::debug!(
            "Precipitation {}..={}: {} rows",
            window.start,
            window.end,
            readings.len()
        );

        Ok(readings
            .into_iter()
            .filter(|r| window.contains(r.date))
            .map(|r| (r.date, r.prcp))
            .collect())
    }

    /// Every station identifier in store order
    pub async fn station_ids(&self) -> Result<Vec<StationId>, AppError> {
        let stations = self.stations.find_all().await?;
        Ok(stations.into_iter().map(|s| s.id).collect())
    }

    /// Temperatures of the most active station over the trailing window
    pub async fn most_active_temperatures(&self) -> Result<Vec<f64>, AppError> {
        let Some(window) = self.trailing_window().await? else {
            return Ok(Vec::new());
        };
        let Some(station) = self.most_active_station().await? else {
            return Ok(Vec::new());
        };

        let observations = self
            .observations
            .find_by_station_in(&station, &window)
            .await?;

        Ok(observations.into_iter().map(|o| o.tobs).collect())
    }

    /// Min/avg/max temperature from `start` onwards, or within `start..=end`.
    ///
    /// Dates that are not `YYYY-MM-DD` match nothing.
    pub async fn range_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, AppError> {
        let Some(start_date) = parse_date(start) else {
            tracing::debug!("Unparsable start date {:?}", start);
            return Ok(TemperatureStats::empty());
        };

        let end_date = match end {
            Some(raw) => match parse_date(raw) {
                Some(date) => Some(date),
                None => {
                    tracing::debug!("Unparsable end date {:?}", raw);
                    return Ok(TemperatureStats::empty());
                }
            },
            None => None,
        };

        let stats = self
            .observations
            .temperature_stats(start_date, end_date)
            .await?;
        if stats.is_empty() {
            tracing::debug!("No observations from {} to {:?}", start_date, end_date);
        }

        Ok(stats)
    }
}
