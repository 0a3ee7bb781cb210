use crate::helpers::{get, seeded_store, spawn_app};
use axum::http::StatusCode;

#[tokio::test]
async fn landing_page_lists_routes() {
    let test_app = spawn_app(seeded_store(&[]).await).await;

    let (status, body) = get(&test_app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Available Routes"));
    assert!(html.contains("/api/v1.0/precipitation"));
    assert!(html.contains("/api/v1.0/{start}/{end}"));
}

#[tokio::test]
async fn serves_api_docs() {
    let test_app = spawn_app(seeded_store(&[]).await).await;

    let (status, _) = get(&test_app, "/docs").await;

    assert_eq!(status, StatusCode::OK);
}
