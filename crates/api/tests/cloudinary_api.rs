mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json, StubAssets, API_KEY, API_SECRET, CLOUD_NAME};
use serde_json::json;
use showcase_api::assets::CloudinaryConfig;
use showcase_core::signing::upload_signature;

#[tokio::test]
async fn signature_matches_timestamp_and_secret() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/admin/cloudinary/signature").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let timestamp = json["timestamp"].as_i64().unwrap();
    assert_eq!(json["signature"], upload_signature(timestamp, API_SECRET));
    assert_eq!(json["apiKey"], API_KEY);
    assert_eq!(json["cloudName"], CLOUD_NAME);
    assert_eq!(json["signature"].as_str().unwrap().len(), 40);
}

#[tokio::test]
async fn signature_is_also_served_over_get() {
    let app = common::build_test_app();
    let response = get(app, "/api/admin/cloudinary/signature").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn signature_without_credentials_is_server_error() {
    let mut config = common::test_config();
    config.cloudinary = CloudinaryConfig::default();
    let app = common::build_test_app_with(config, Arc::new(StubAssets::default()));

    let response = post_empty(app, "/api/admin/cloudinary/signature").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn delete_requires_public_id() {
    let app = common::build_test_app();
    for body in [json!({}), json!({ "publicId": "" }), json!({ "publicId": 7 })] {
        let response = post_json(app.clone(), "/api/admin/cloudinary/delete", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json, json!({ "success": false, "error": "Public ID is required" }));
    }
}

#[tokio::test]
async fn delete_forwards_to_provider() {
    let assets = Arc::new(StubAssets::default());
    let app = common::build_test_app_with(common::test_config(), assets.clone());

    let response = post_json(
        app,
        "/api/admin/cloudinary/delete",
        json!({ "publicId": "gallery/launch" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "result": { "result": "ok" } }));

    assert_eq!(
        *assets.destroyed.lock().unwrap(),
        vec!["gallery/launch".to_string()]
    );
}

#[tokio::test]
async fn provider_failure_is_server_error() {
    let assets = Arc::new(StubAssets {
        fail: true,
        ..StubAssets::default()
    });
    let app = common::build_test_app_with(common::test_config(), assets);

    let response = post_json(
        app,
        "/api/admin/cloudinary/delete",
        json!({ "publicId": "gallery/launch" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Invalid Signature"));
}
