use crate::helpers::{get, get_json, seeded_store, spawn_app, spawn_legacy_app, Row, TestApp};
use axum::http::StatusCode;
use serde_json::json;

/// Coverage runs 2016-08-23 through 2017-08-23; only the last three days
/// carry temperatures.
fn station_rows() -> Vec<Row<'static>> {
    vec![
        ("USC00519397", "2016-08-23", Some(0.0), None),
        ("USC00519397", "2017-08-21", Some(0.0), Some(70.0)),
        ("USC00519397", "2017-08-22", Some(0.5), Some(75.0)),
        ("USC00519397", "2017-08-23", Some(0.0), Some(80.0)),
    ]
}

async fn station_app() -> TestApp {
    spawn_app(seeded_store(&station_rows()).await).await
}

#[tokio::test]
async fn summarizes_custom_range() {
    let test_app = station_app().await;

    let (status, body) = get_json(&test_app, "/api/v1.0/2017-08-20/2017-08-23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "Start": "2017-08-20",
            "End": "2017-08-23",
            "TMIN": 70.0,
            "TAVG": 75.0,
            "TMAX": 80.0
        }])
    );
}

#[tokio::test]
async fn summarizes_from_start_to_latest_date() {
    let test_app = station_app().await;

    let (status, body) = get_json(&test_app, "/api/v1.0/2017-08-22").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["Start"], "2017-08-22");
    assert_eq!(body[0]["End"], "2017-08-23");
    assert_eq!(body[0]["TMIN"], 75.0);
    assert_eq!(body[0]["TMAX"], 80.0);
    assert_eq!(body[0]["TAVG"], 77.5);
}

#[tokio::test]
async fn start_equal_to_latest_date_is_accepted() {
    let test_app = station_app().await;

    let (status, body) = get_json(&test_app, "/api/v1.0/2017-08-23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["TAVG"], 80.0);
}

#[tokio::test]
async fn start_after_latest_date_is_out_of_range() {
    let test_app = station_app().await;

    for uri in ["/api/v1.0/2017-08-24", "/api/v1.0/2099-01-01"] {
        let (status, body) = get_json(&test_app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "out_of_range");
    }
}

#[tokio::test]
async fn reversed_range_is_rejected() {
    let test_app = station_app().await;

    let (status, body) = get_json(&test_app, "/api/v1.0/2017-08-23/2017-08-21").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "out_of_range");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("start date is after end date"));
}

#[tokio::test]
async fn unpadded_dates_are_malformed() {
    let test_app = station_app().await;

    for uri in [
        "/api/v1.0/2017-8-21",
        "/api/v1.0/2017-08-21/2017-8-23",
        "/api/v1.0/yesterday",
    ] {
        let (status, body) = get_json(&test_app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "malformed_date");
    }
}

#[tokio::test]
async fn range_without_temperatures_is_not_found() {
    let test_app = station_app().await;

    let (status, body) = get_json(&test_app, "/api/v1.0/2016-08-23/2017-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no_data_in_range");
}

#[tokio::test]
async fn empty_store_is_unavailable() {
    let test_app = spawn_app(seeded_store(&[]).await).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/2017-08-20").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "empty_store");
}

#[tokio::test]
async fn legacy_mode_answers_with_flat_marker() {
    let test_app = spawn_legacy_app(seeded_store(&station_rows()).await).await;

    for uri in [
        "/api/v1.0/2099-01-01",
        "/api/v1.0/2017-8-21",
        "/api/v1.0/2017-08-23/2017-08-21",
    ] {
        let (status, body) = get(&test_app, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, b"error", "{uri}");
    }

    let (status, body) = get_json(&test_app, "/api/v1.0/2017-08-20/2017-08-23").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["TAVG"], 75.0);
}
