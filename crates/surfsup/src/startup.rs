use crate::{
    climate::{ClimateService, RangeViolation},
    db::{ObservationStore, SqliteStore},
    index_handler, precipitation, routes, stations, summary_for_range, summary_from_start, tobs,
    ErrorBody, SummaryResult, TemperatureReading,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::{path::Path, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub legacy_errors: bool,
    pub climate: Arc<ClimateService>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObservationStore>, remote_url: String, legacy_errors: bool) -> Self {
        Self {
            remote_url,
            legacy_errors,
            climate: Arc::new(ClimateService::new(store)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::readings::precipitation,
        routes::api::readings::stations,
        routes::api::readings::tobs,
        routes::api::summary::summary_from_start,
        routes::api::summary::summary_for_range,
    ),
    components(
        schemas(
                SummaryResult,
                TemperatureReading,
                ErrorBody,
                RangeViolation,
        )
    ),
    tags(
        (name = "surfsup climate api", description = "a read-only RESTful api over daily Hawaii precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    database: &Path,
    legacy_errors: bool,
) -> Result<AppState, anyhow::Error> {
    let store = SqliteStore::open(database)
        .await
        .map_err(|e| anyhow!("error opening observation store: {}", e))?;

    Ok(AppState::new(Arc::new(store), remote_url, legacy_errors))
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(summary_from_start))
        .route("/api/v1.0/{start}/{end}", get(summary_for_range))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
