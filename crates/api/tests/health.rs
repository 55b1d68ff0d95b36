mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, StubAssets};

#[tokio::test]
async fn health_reports_store_status() {
    let app = common::build_test_app();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_is_degraded_without_database() {
    let mut config = common::test_config();
    config.database.uri = None;
    let app = common::build_test_app_with(config, Arc::new(StubAssets::default()));

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = common::build_test_app();
    let response = get(app, "/api/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
