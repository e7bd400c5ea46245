//! Startup schema check
//!
//! The store is provisioned externally. Before serving, select every declared
//! column from both tables once so a missing table or column fails fast
//! instead of surfacing as a 500 on the first request.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect};

use crate::entity::{measurement, station};
use crate::error::DomainError;

/// Row counts observed while verifying the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub stations: u64,
    pub observations: u64,
}

/// Check that the `station` and `measurement` tables match the declared entities
pub async fn verify_schema(db: &DatabaseConnection) -> Result<StoreSummary, DomainError> {
    station::Entity::find()
        .limit(1)
        .all(db)
        .await
        .map_err(|e| DomainError::Schema(format!("station table: {}", e)))?;

    measurement::Entity::find()
        .limit(1)
        .all(db)
        .await
        .map_err(|e| DomainError::Schema(format!("measurement table: {}", e)))?;

    let stations = station::Entity::find().count(db).await?;
    let observations = measurement::Entity::find().count(db).await?;

    Ok(StoreSummary {
        stations,
        observations,
    })
}
