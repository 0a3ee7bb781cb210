use axum::{extract::State, Json};
use std::{collections::HashMap, sync::Arc};

use super::ApiError;
use crate::{AppState, ErrorBody, PrecipitationReading, TemperatureReading};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation for every station over the last year of record", body = Vec<HashMap<String, Option<f64>>>),
        (status = SERVICE_UNAVAILABLE, description = "Dataset holds no observations", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationReading>>, ApiError> {
    let readings = state.climate.precipitation_last_year().await?;
    Ok(Json(readings))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every station identifier in the dataset", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let stations = state.climate.list_stations().await?;
    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Last year of temperature observations for the most active station", body = Vec<TemperatureReading>),
        (status = SERVICE_UNAVAILABLE, description = "Dataset holds no observations", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
    let readings = state.climate.tobs_for_most_active_station().await?;
    Ok(Json(readings))
}
