//! SeaORM adapter for ObservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::entities::{
    DailyPrecipitation, Observation, StationId, TemperatureStats, TrailingWindow,
};
use crate::domain::ports::ObservationRepository;
use crate::entity::measurement;
use crate::error::DomainError;

/// SeaORM implementation of ObservationRepository
pub struct DatabaseObservationRepository {
    db: DatabaseConnection,
}

impl DatabaseObservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ObservationRepository for DatabaseObservationRepository {
    async fn latest_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        // MAX over an empty table yields a single NULL row
        let result: Option<Option<NaiveDate>> = measurement::Entity::find()
            .select_only()
            .column_as(measurement::Column::Date.max(), "latest")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.flatten())
    }

    async fn most_active_station(&self) -> Result<Option<StationId>, DomainError> {
        let result: Option<(String, i64)> = measurement::Entity::find()
            .select_only()
            .column(measurement::Column::Station)
            .column_as(measurement::Column::Id.count(), "observations")
            .group_by(measurement::Column::Station)
            .order_by_desc(measurement::Column::Id.count())
            .order_by_asc(measurement::Column::Station)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if let Some((ref station, count)) = result {
            tracing::debug!("Most active station {} with {} observations", station, count);
        }

        Ok(result.map(|(station, _)| StationId(station)))
    }

    async fn precipitation_in(
        &self,
        window: &TrailingWindow,
    ) -> Result<Vec<DailyPrecipitation>, DomainError> {
        let rows: Vec<(NaiveDate, Option<f64>)> = measurement::Entity::find()
            .select_only()
            .columns([measurement::Column::Date, measurement::Column::Prcp])
            .filter(measurement::Column::Date.gte(window.start))
            .filter(measurement::Column::Date.lte(window.end))
            .order_by_asc(measurement::Column::Date)
            .order_by_asc(measurement::Column::Station)
            .order_by_asc(measurement::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(date, prcp)| DailyPrecipitation { date, prcp })
            .collect())
    }

    async fn find_by_station_in(
        &self,
        station: &StationId,
        window: &TrailingWindow,
    ) -> Result<Vec<Observation>, DomainError> {
        let results = measurement::Entity::find()
            .filter(measurement::Column::Station.eq(station.as_str()))
            .filter(measurement::Column::Date.gte(window.start))
            .filter(measurement::Column::Date.lte(window.end))
            .order_by_asc(measurement::Column::Date)
            .order_by_asc(measurement::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TemperatureStats, DomainError> {
        let mut query = measurement::Entity::find()
            .select_only()
            .column_as(measurement::Column::Tobs.min(), "min_tobs")
            .column_as(
                SimpleExpr::FunctionCall(Func::avg(Expr::col(measurement::Column::Tobs))),
                "avg_tobs",
            )
            .column_as(measurement::Column::Tobs.max(), "max_tobs")
            .filter(measurement::Column::Date.gte(start));

        if let Some(end) = end {
            query = query.filter(measurement::Column::Date.lte(end));
        }

        // Aggregates always return exactly one row, NULLs when nothing matched
        let result: Option<(Option<f64>, Option<f64>, Option<f64>)> = query
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result
            .map(|(min, avg, max)| TemperatureStats { min, avg, max })
            .unwrap_or_default())
    }
}

/// Convert SeaORM model to domain entity
impl From<measurement::Model> for Observation {
    fn from(model: measurement::Model) -> Self {
        Observation {
            station: StationId(model.station),
            date: model.date,
            prcp: model.prcp,
            tobs: model.tobs,
        }
    }
}
