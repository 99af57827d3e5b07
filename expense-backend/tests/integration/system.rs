// tests/integration/system.rs

use axum::http::StatusCode;
use tower::ServiceExt;

use crate::common::{app_helper, request};

#[tokio::test]
async fn test_health_check() {
    let (app, _db) = app_helper::setup_app().await;

    let res = app
        .oneshot(request::json_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(request::read_bytes(res).await, b"OK");
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let (app, _db) = app_helper::setup_app().await;

    let res = app
        .oneshot(request::json_request("GET", "/api/unknown", None))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
