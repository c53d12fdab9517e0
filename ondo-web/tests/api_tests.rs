//! Integration tests for ondo-web API endpoints
//!
//! Tests cover:
//! - Recommendation pipeline happy path (adjusted = current + offset)
//! - Offset degradation when the predictor is down, misconfigured, or erroring
//! - Weather failure surfacing (missing credential, no temperature entry)
//! - Feedback validation, persistence, and sequential append behavior
//! - Health endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::path::Path;
use tower::util::ServiceExt; // for `oneshot` method
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ondo_common::config::WebConfig;
use ondo_web::{build_router, AppState};

/// Test helper: Build config pointing at test doubles
fn test_config(kma_uri: Option<&str>, predictor_uri: Option<&str>, dir: &Path) -> WebConfig {
    WebConfig {
        region_label: "서울".to_string(),
        kma_api_key: kma_uri.map(|_| "test-service-key".to_string()),
        kma_base_url: kma_uri.unwrap_or("http://127.0.0.1:9").to_string(),
        grid_nx: 60,
        grid_ny: 127,
        predictor_url: predictor_uri.map(|u| u.to_string()),
        feedback_path: dir.join("feedback_db.json"),
    }
}

/// Test helper: Create app over a config
fn setup_app(config: WebConfig) -> axum::Router {
    let state = AppState::new(config).expect("Should build app state");
    build_router(state)
}

/// Test helper: Mount a KMA double returning the given forecast items
async fn mount_kma(server: &MockServer, items: Value) {
    Mock::given(method("GET"))
        .and(path("/getVilageFcst"))
        .and(query_param("dataType", "JSON"))
        .and(query_param("serviceKey", "test-service-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "body": { "items": { "item": items } } }
        })))
        .mount(server)
        .await;
}

/// Test helper: GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: JSON POST request
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Recommendation pipeline
// =============================================================================

#[tokio::test]
async fn test_weather_happy_path_applies_offset() {
    let kma = MockServer::start().await;
    let ml = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_kma(
        &kma,
        json!([
            { "category": "SKY", "fcstValue": "1" },
            { "category": "TMP", "fcstValue": "14" },
        ]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/predict_offset"))
        .and(body_partial_json(json!({ "userId": "user_a", "currentTemp": 14.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "user_a",
            "temperatureOffset": 1.5,
        })))
        .mount(&ml)
        .await;

    let app = setup_app(test_config(Some(&kma.uri()), Some(&ml.uri()), dir.path()));
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["region"], "서울");
    assert_eq!(body["currentTemperature"], 14.0);
    assert_eq!(body["offset"], 1.5);
    assert_eq!(body["adjustedTemperature"], 15.5);
    assert_eq!(body["offsetDegraded"], false);
    assert_eq!(body["weatherStatus"], "맑음");

    // 15.5°C falls in the 12-16 rule
    let names: Vec<&str> = body["recommendation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"가디건"));
}

#[tokio::test]
async fn test_weather_missing_user_id_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(test_config(None, None, dir.path()));

    let response = app.oneshot(get("/api/weather")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("userId"));
}

#[tokio::test]
async fn test_weather_without_credential_is_500() {
    let kma = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    // Base URL configured but no service key
    let mut config = test_config(Some(&kma.uri()), None, dir.path());
    config.kma_api_key = None;

    let app = setup_app(config);
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_weather_payload_without_temperature_is_500() {
    let kma = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_kma(&kma, json!([{ "category": "POP", "fcstValue": "30" }])).await;

    let app = setup_app(test_config(Some(&kma.uri()), None, dir.path()));
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_weather_upstream_error_is_500() {
    let kma = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/getVilageFcst"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&kma)
        .await;

    let app = setup_app(test_config(Some(&kma.uri()), None, dir.path()));
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Offset degradation: enrichment never blocks the pipeline
// =============================================================================

#[tokio::test]
async fn test_predictor_not_configured_degrades_to_zero() {
    let kma = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_kma(&kma, json!([{ "category": "TMP", "fcstValue": "21" }])).await;

    let app = setup_app(test_config(Some(&kma.uri()), None, dir.path()));
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["offset"], 0.0);
    assert_eq!(body["offsetDegraded"], true);
    assert_eq!(body["adjustedTemperature"], 21.0);
    assert!(!body["recommendation"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_predictor_error_status_degrades_to_zero() {
    let kma = MockServer::start().await;
    let ml = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_kma(&kma, json!([{ "category": "TMP", "fcstValue": "21" }])).await;

    Mock::given(method("POST"))
        .and(path("/predict_offset"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ml)
        .await;

    let app = setup_app(test_config(Some(&kma.uri()), Some(&ml.uri()), dir.path()));
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["offset"], 0.0);
    assert_eq!(body["offsetDegraded"], true);
}

#[tokio::test]
async fn test_predictor_garbage_payload_degrades_to_zero() {
    let kma = MockServer::start().await;
    let ml = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_kma(&kma, json!([{ "category": "TMP", "fcstValue": "21" }])).await;

    Mock::given(method("POST"))
        .and(path("/predict_offset"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&ml)
        .await;

    let app = setup_app(test_config(Some(&kma.uri()), Some(&ml.uri()), dir.path()));
    let response = app.oneshot(get("/api/weather?userId=user_a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["offset"], 0.0);
    assert_eq!(body["offsetDegraded"], true);
}

// =============================================================================
// Feedback endpoint
// =============================================================================

#[tokio::test]
async fn test_feedback_sequential_appends() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(None, None, dir.path());
    let feedback_path = config.feedback_path.clone();
    let app = setup_app(config);

    for rating in ["hot", "cold", "just_right"] {
        let request = post_json(
            "/api/feedback",
            json!({
                "userId": "user_a",
                "temp": 18.0,
                "offset": 0.5,
                "feedback": rating,
            }),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["message"], "Feedback recorded successfully");
    }

    let entries = ondo_common::feedback_file::read_entries(&feedback_path);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].user_id, "user_a");
    for pair in entries.windows(2) {
        assert!(pair[1].timestamp >= pair[0].timestamp);
    }
}

#[tokio::test]
async fn test_feedback_missing_field_is_400_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(None, None, dir.path());
    let feedback_path = config.feedback_path.clone();
    let app = setup_app(config);

    // Missing userId
    let request = post_json(
        "/api/feedback",
        json!({ "temp": 18.0, "offset": 0.5, "feedback": "hot" }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing feedback
    let request = post_json(
        "/api/feedback",
        json!({ "userId": "user_a", "temp": 18.0, "offset": 0.5 }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing persisted
    assert!(ondo_common::feedback_file::read_entries(&feedback_path).is_empty());
}

#[tokio::test]
async fn test_feedback_unknown_rating_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(test_config(None, None, dir.path()));

    let request = post_json(
        "/api/feedback",
        json!({ "userId": "user_a", "temp": 18.0, "offset": 0.0, "feedback": "lukewarm" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health endpoint and static UI
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(test_config(None, None, dir.path()));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "ondo-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_index_page_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup_app(test_config(None, None, dir.path()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("ONDO"));
}
