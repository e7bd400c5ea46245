//! SeaORM adapter for StationRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::entities::{Station, StationId};
use crate::domain::ports::StationRepository;
use crate::entity::station;
use crate::error::DomainError;

/// SeaORM implementation of StationRepository
pub struct DatabaseStationRepository {
    db: DatabaseConnection,
}

impl DatabaseStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StationRepository for DatabaseStationRepository {
    async fn find_all(&self) -> Result<Vec<Station>, DomainError> {
        let results = station::Entity::find()
            .order_by_asc(station::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<station::Model> for Station {
    fn from(model: station::Model) -> Self {
        Station {
            id: StationId(model.station),
            name: model.name,
            latitude: model.latitude,
            longitude: model.longitude,
            elevation: model.elevation,
        }
    }
}
