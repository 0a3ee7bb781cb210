use crate::helpers::{get_json, seeded_store, spawn_app, MockObservationAccess, Row};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use surfsup::db::{Error, Field, Reading, StationCount};

fn last_year_rows() -> Vec<Row<'static>> {
    vec![
        ("USC00519397", "2016-08-22", Some(0.7), Some(77.0)),
        ("USC00519397", "2016-08-23", Some(0.0), Some(81.0)),
        ("USC00519397", "2017-08-22", Some(0.0), Some(82.0)),
        ("USC00519281", "2017-08-22", Some(0.5), Some(76.0)),
        ("USC00519281", "2017-08-23", None, Some(77.0)),
        ("USC00519397", "2017-08-23", Some(0.08), Some(79.0)),
        ("USC00519397", "2015-03-01", Some(1.2), Some(68.0)),
    ]
}

#[tokio::test]
async fn precipitation_returns_last_year_as_date_maps() {
    let test_app = spawn_app(seeded_store(&last_year_rows()).await).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "2016-08-23": 0.0 },
            { "2017-08-22": 0.0 },
            { "2017-08-22": 0.5 },
            { "2017-08-23": null },
            { "2017-08-23": 0.08 }
        ])
    );
}

#[tokio::test]
async fn stations_lists_each_identifier_once() {
    let test_app = spawn_app(seeded_store(&last_year_rows()).await).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    let mut stations: Vec<String> = serde_json::from_value(body).unwrap();
    stations.sort();
    assert_eq!(stations, vec!["USC00519281", "USC00519397"]);
}

#[tokio::test]
async fn tobs_returns_most_active_station_last_year() {
    let test_app = spawn_app(seeded_store(&last_year_rows()).await).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "station": "USC00519397", "date": "2016-08-23", "tobs": 81.0 },
            { "station": "USC00519397", "date": "2017-08-22", "tobs": 82.0 },
            { "station": "USC00519397", "date": "2017-08-23", "tobs": 79.0 }
        ])
    );
}

#[tokio::test]
async fn precipitation_on_empty_store_is_unavailable() {
    let mut store = MockObservationAccess::new();
    store.expect_latest_date().times(1).returning(|| Ok(None));
    store.expect_series().never();

    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "empty_store");
}

#[tokio::test]
async fn tobs_queries_only_the_leading_station() {
    let mut store = MockObservationAccess::new();
    store
        .expect_latest_date()
        .returning(|| Ok(Some(String::from("2017-08-23"))));
    store.expect_station_counts().times(1).returning(|| {
        Ok(vec![
            StationCount {
                station: String::from("USC00519281"),
                observations: 2772,
            },
            StationCount {
                station: String::from("USC00519397"),
                observations: 2724,
            },
        ])
    });
    store
        .expect_series()
        .withf(|filter, field| {
            *field == Field::Temperature
                && filter.station.as_deref() == Some("USC00519281")
                && filter.start.as_deref() == Some("2016-08-23")
                && filter.end.as_deref() == Some("2017-08-23")
        })
        .times(1)
        .returning(|_, _| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn tobs_tie_uses_first_listed_station() {
    let mut store = MockObservationAccess::new();
    store
        .expect_latest_date()
        .returning(|| Ok(Some(String::from("2017-08-23"))));
    store.expect_station_counts().times(1).returning(|| {
        Ok(vec![
            StationCount {
                station: String::from("USC00519523"),
                observations: 2669,
            },
            StationCount {
                station: String::from("USC00516128"),
                observations: 2669,
            },
        ])
    });
    store
        .expect_series()
        .withf(|filter, _| filter.station.as_deref() == Some("USC00519523"))
        .times(1)
        .returning(|_, _| {
            Ok(vec![Reading {
                station: String::from("USC00519523"),
                date: String::from("2017-08-23"),
                value: Some(82.0),
            }])
        });

    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "station": "USC00519523", "date": "2017-08-23", "tobs": 82.0 }])
    );
}

#[tokio::test]
async fn store_failure_is_an_internal_error() {
    let mut store = MockObservationAccess::new();
    store
        .expect_stations()
        .times(1)
        .returning(|| Err(Error::Query(sqlx::Error::PoolTimedOut)));

    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = get_json(&test_app, "/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "store_failure");
}
