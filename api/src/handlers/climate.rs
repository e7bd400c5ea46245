//! Climate handlers
//!
//! Read-only endpoints over the station and observation data.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use crate::domain::entities::{StationId, TemperatureStats};
use crate::error::AppError;
use crate::AppState;

/// Route listing served at the root
pub const WELCOME_HTML: &str = "Welcome to the Climate App API!<br/>\
Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;<br/>";

/// Precipitation keyed by `YYYY-MM-DD`, in ascending date order
pub type PrecipitationResponse = BTreeMap<String, Option<f64>>;

/// GET /
///
/// Lists the available routes.
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_HTML)
}

/// GET /api/v1.0/precipitation
///
/// Precipitation per day over the trailing 365-day window.
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<PrecipitationResponse>, AppError> {
    let summary = state.climate_service.precipitation_summary().await?;

    Ok(Json(
        summary
            .into_iter()
            .map(|(date, prcp)| (date.to_string(), prcp))
            .collect(),
    ))
}

/// GET /api/v1.0/stations
///
/// Every station identifier.
pub async fn stations(State(state): State<AppState>) -> Result<Json<Vec<StationId>>, AppError> {
    Ok(Json(state.climate_service.station_ids().await?))
}

/// GET /api/v1.0/tobs
///
/// Temperatures of the most active station over the trailing window.
pub async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<f64>>, AppError> {
    Ok(Json(state.climate_service.most_active_temperatures().await?))
}

/// GET /api/v1.0/:start
///
/// `[min, avg, max]` temperature from `start` onwards.
pub async fn stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, AppError> {
    Ok(Json(state.climate_service.range_stats(&start, None).await?))
}

/// GET /api/v1.0/:start/:end
///
/// `[min, avg, max]` temperature between `start` and `end`, both inclusive.
pub async fn stats_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, AppError> {
    Ok(Json(
        state
            .climate_service
            .range_stats(&start, Some(&end))
            .await?,
    ))
}
