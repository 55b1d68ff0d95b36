//! HTTP-level integration tests for the content resources.
//!
//! Covers the per-resource envelopes, fixed sort orders, gallery filtering,
//! enum validation and the 201 create envelope.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create(app: &Router, uri: &str, payload: Value) -> Value {
    let response = post_json(app.clone(), uri, payload).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    // Keep createdAt strictly increasing between inserts.
    tokio::time::sleep(Duration::from_millis(5)).await;
    body_json(response).await
}

fn service(title: &str) -> Value {
    json!({ "icon": "code", "title": title, "description": "What we do", "features": ["a", "b"] })
}

fn gallery(title: &str, category: Option<&str>) -> Value {
    let mut payload = json!({
        "title": title,
        "image": "https://img.example/g.png",
        "imagePublicId": "gallery/g"
    });
    if let Some(category) = category {
        payload["category"] = json!(category);
    }
    payload
}

// ---------------------------------------------------------------------------
// Create envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_persisted_document() {
    let app = common::build_test_app();
    let json = create(
        &app,
        "/api/admin/hero",
        json!({ "title": "  Welcome  ", "subtitle": "We build things", "image": "https://img.example/h.png" }),
    )
    .await;

    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["title"], "Welcome");
    assert_eq!(data["_id"].as_str().unwrap().len(), 24);
    assert!(data["createdAt"].is_string());
    assert!(data["updatedAt"].is_string());
}

#[tokio::test]
async fn unknown_fields_are_dropped() {
    let app = common::build_test_app();
    let json = create(
        &app,
        "/api/admin/cta",
        json!({
            "title": "Talk to us",
            "description": "Let's build",
            "buttonText": "Contact",
            "buttonLink": "/contact",
            "isAdmin": true
        }),
    )
    .await;
    assert!(json["data"].get("isAdmin").is_none());
}

// ---------------------------------------------------------------------------
// Envelopes and ordering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn services_use_services_envelope_newest_first() {
    let app = common::build_test_app();
    for title in ["Web", "Mobile", "Cloud"] {
        create(&app, "/api/admin/services", service(title)).await;
    }

    let json = body_json(get(app, "/api/services").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 3);
    let titles: Vec<&str> = json["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Cloud", "Mobile", "Web"]);
}

#[tokio::test]
async fn digital_solutions_are_counted() {
    let app = common::build_test_app();
    create(&app, "/api/admin/digital-solutions", service("Automation")).await;

    let json = body_json(get(app, "/api/digital-solutions").await).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["features"], json!(["a", "b"]));
}

#[tokio::test]
async fn testimonials_are_a_bare_array_with_default_rating() {
    let app = common::build_test_app();
    create(
        &app,
        "/api/admin/testimonials",
        json!({ "name": "Ada", "role": "CTO", "content": "Great work" }),
    )
    .await;

    let json = body_json(get(app, "/api/testimonials").await).await;
    let items = json.as_array().expect("bare array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["rating"], 5);
}

#[tokio::test]
async fn brands_list_oldest_first() {
    let app = common::build_test_app();
    for name in ["First", "Second"] {
        create(
            &app,
            "/api/admin/brands",
            json!({ "name": name, "logo": "https://img.example/logo.png" }),
        )
        .await;
    }

    let json = body_json(get(app, "/api/brands").await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn faqs_follow_display_order() {
    let app = common::build_test_app();
    for (question, order) in [("Third?", 3), ("First?", 1), ("Second?", 2)] {
        create(
            &app,
            "/api/admin/faqs",
            json!({ "question": question, "answer": "Yes", "order": order }),
        )
        .await;
    }

    let json = body_json(get(app, "/api/faqs").await).await;
    let questions: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["question"].as_str().unwrap())
        .collect();
    assert_eq!(questions, vec!["First?", "Second?", "Third?"]);
}

#[tokio::test]
async fn journey_highlights_sort_by_id() {
    let app = common::build_test_app();
    for id in [2, 3, 1] {
        create(
            &app,
            "/api/admin/journey-highlights",
            json!({ "id": id, "period": "2020", "title": "Step", "description": "Done", "tags": ["rust"] }),
        )
        .await;
    }

    let json = body_json(get(app, "/api/journey-highlights").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn professional_journey_sorts_by_start_date() {
    let app = common::build_test_app();
    for (title, start) in [("Junior", "2016-01-01"), ("Lead", "2022-01-01"), ("Senior", "2019-01-01")] {
        create(
            &app,
            "/api/admin/professional-journey",
            json!({ "title": title, "company": "Acme", "startDate": start, "description": "Work" }),
        )
        .await;
    }

    let json = body_json(get(app, "/api/professional-journey").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Lead", "Senior", "Junior"]);
    assert!(json["data"][0]["startDate"]
        .as_str()
        .unwrap()
        .starts_with("2022-01-01T00:00:00"));
}

#[tokio::test]
async fn core_sections_list_what_was_created() {
    let app = common::build_test_app();
    create(
        &app,
        "/api/admin/core-expertise",
        json!({ "title": "Backend", "description": "APIs", "icon": "server", "skills": ["Rust"] }),
    )
    .await;
    create(
        &app,
        "/api/admin/core-competencies",
        json!({ "title": "Delivery", "description": "On time" }),
    )
    .await;

    let expertise = body_json(get(app.clone(), "/api/core-expertise").await).await;
    assert_eq!(expertise["data"].as_array().unwrap().len(), 1);

    let competencies = body_json(get(app, "/api/admin/core-competencies").await).await;
    assert_eq!(competencies["data"][0]["order"], 0);
}

#[tokio::test]
async fn empty_collections_list_nothing() {
    let app = common::build_test_app();
    let json = body_json(get(app.clone(), "/api/hero").await).await;
    assert_eq!(json, json!({ "success": true, "data": [] }));

    let json = body_json(get(app, "/api/social-links").await).await;
    assert_eq!(json, json!([]));
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gallery_category_filter() {
    let app = common::build_test_app();
    create(&app, "/api/admin/gallery", gallery("Launch", None)).await;
    create(&app, "/api/admin/gallery", gallery("Offsite", Some("team"))).await;

    let all = body_json(get(app.clone(), "/api/gallery").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);
    assert_eq!(all["data"][1]["category"], "projects");

    let all = body_json(get(app.clone(), "/api/gallery?category=all").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let team = body_json(get(app.clone(), "/api/gallery?category=team").await).await;
    assert_eq!(team["data"].as_array().unwrap().len(), 1);
    assert_eq!(team["data"][0]["title"], "Offsite");

    let none = body_json(get(app, "/api/gallery?category=festival").await).await;
    assert!(none["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn gallery_rejects_unknown_category() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/admin/gallery",
        gallery("Party", Some("festival")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("category"));

    let listed = body_json(get(app, "/api/gallery").await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_gallery_query_uses_error_envelope() {
    let app = common::build_test_app();
    let response = get(app, "/api/gallery?category=team&category=events").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("category"));
}

// ---------------------------------------------------------------------------
// Social links
// ---------------------------------------------------------------------------

#[tokio::test]
async fn social_link_platform_must_be_known() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/admin/social-links",
        json!({ "platform": "myspace", "url": "https://myspace.com/me" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    create(
        &app,
        "/api/admin/social-links",
        json!({ "platform": "linkedin", "url": "https://linkedin.com/in/me" }),
    )
    .await;
    let json = body_json(get(app, "/api/social-links").await).await;
    assert_eq!(json[0]["platform"], "linkedin");
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_info_returns_latest_or_null() {
    let app = common::build_test_app();
    let json = body_json(get(app.clone(), "/api/contact").await).await;
    assert_eq!(json, json!({ "success": true, "data": null }));

    for email in ["old@example.com", "new@example.com"] {
        create(
            &app,
            "/api/admin/contact/info",
            json!({ "email": email, "phone": "+1 555 0100", "address": "1 Main St" }),
        )
        .await;
    }

    let json = body_json(get(app, "/api/contact").await).await;
    assert_eq!(json["data"]["email"], "new@example.com");
}

#[tokio::test]
async fn contact_form_creates_unread_message() {
    let app = common::build_test_app();
    let json = create(
        &app,
        "/api/contact",
        json!({ "name": "Grace", "email": "grace@example.com", "message": "Hello there" }),
    )
    .await;
    assert_eq!(json["data"]["read"], false);

    let messages = body_json(get(app, "/api/admin/contact/messages").await).await;
    assert_eq!(messages["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn contact_form_validates_email() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/contact",
        json!({ "name": "Grace", "email": "not-an-email", "message": "Hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("email"));
}
