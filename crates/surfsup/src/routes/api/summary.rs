use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use std::sync::Arc;

use super::{ApiError, LEGACY_ERROR_MARKER};
use crate::{climate, AppState, ErrorBody, SummaryResult};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
         ("start" = String, Path, description = "First day of the range, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, avg and max temperature from start through the latest observation", body = Vec<SummaryResult>),
        (status = BAD_REQUEST, description = "Malformed date or start outside the observed range", body = ErrorBody),
        (status = NOT_FOUND, description = "No temperature observations in range", body = ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Dataset holds no observations", body = ErrorBody)
    ))]
pub async fn summary_from_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let result = state.climate.summary_for_start(&start).await;
    summary_response(&state, result)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
         ("start" = String, Path, description = "First day of the range, YYYY-MM-DD"),
         ("end" = String, Path, description = "Last day of the range, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, avg and max temperature for the inclusive range", body = Vec<SummaryResult>),
        (status = BAD_REQUEST, description = "Malformed date, reversed range, or dates outside the observed range", body = ErrorBody),
        (status = NOT_FOUND, description = "No temperature observations in range", body = ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Dataset holds no observations", body = ErrorBody)
    ))]
pub async fn summary_for_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let result = state.climate.summary_for_range(&start, &end).await;
    summary_response(&state, result)
}

fn summary_response(state: &AppState, result: Result<SummaryResult, climate::Error>) -> Response {
    match result {
        Ok(summary) => Json(vec![summary]).into_response(),
        Err(err) if state.legacy_errors => {
            warn!("summary request failed ({}): {}", err.kind(), err);
            LEGACY_ERROR_MARKER.into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
