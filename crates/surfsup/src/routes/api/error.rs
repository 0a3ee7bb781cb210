use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::climate::Error;

/// Body returned by the first API version for any failed summary request
pub const LEGACY_ERROR_MARKER: &str = "error";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// One of `malformed_date`, `out_of_range`, `no_data_in_range`,
    /// `empty_store`, `store_failure`
    pub error: String,
    pub message: String,
}

pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::MalformedDate(_) | Error::OutOfRange { .. } => StatusCode::BAD_REQUEST,
            Error::NoDataInRange { .. } => StatusCode::NOT_FOUND,
            Error::EmptyStore => StatusCode::SERVICE_UNAVAILABLE,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("query failed: {}", self.0);
        } else {
            warn!("rejected query: {}", self.0);
        }

        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
