//! Integration tests for the highscore API endpoints
//!
//! Tests cover:
//! - Time submission with validation and rounding
//! - State query shape (leaderboard + pending list)
//! - Pending registration (trimming, unknown id, blank fields)
//! - Dismissal idempotence
//! - Persistence across restarts
//! - Health endpoint and cache headers

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

use highscore::store::{Store, STATE_FILE_NAME};
use highscore::{build_router, AppState, ScoreService};

/// Test helper: Create app backed by a state file in the given folder
fn setup_app(dir: &TempDir) -> axum::Router {
    let store = Store::new(dir.path().join(STATE_FILE_NAME));
    let service = ScoreService::open(store).expect("Should open state file");
    build_router(AppState::new(Arc::new(service)))
}

/// Test helper: Create GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create POST request with JSON body
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
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

/// Test helper: submit a time and return the pending id
async fn submit(app: &axum::Router, time: f64) -> String {
    let response = app
        .clone()
        .oneshot(post_json("/submit", json!({ "time": time })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);
    body["id"].as_str().expect("id should be a string").to_string()
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "highscore");
    assert!(body["version"].is_string());
}

// =============================================================================
// State Query Tests
// =============================================================================

#[tokio::test]
async fn test_state_starts_empty() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let response = app.oneshot(get("/state")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["highscores"], json!([]));
    assert_eq!(body["pending"], json!([]));
}

#[tokio::test]
async fn test_responses_are_not_cacheable() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let response = app.oneshot(get("/state")).await.unwrap();
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

// =============================================================================
// Submission Tests
// =============================================================================

#[tokio::test]
async fn test_submit_rounds_time_and_appears_pending() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let id = submit(&app, 125.7).await;

    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pending"][0]["id"], id.as_str());
    assert_eq!(body["pending"][0]["time"], 126);
}

#[tokio::test]
async fn test_submit_negative_time_rejected() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let response = app
        .clone()
        .oneshot(post_json("/submit", json!({ "time": -1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].is_string());

    // No pending entry was created
    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pending"], json!([]));
}

#[tokio::test]
async fn test_submitted_ids_are_unique() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let a = submit(&app, 10.0).await;
    let b = submit(&app, 10.0).await;
    assert_ne!(a, b);
}

// =============================================================================
// Registration Tests
// =============================================================================

#[tokio::test]
async fn test_register_moves_pending_to_leaderboard() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let id = submit(&app, 125.7).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "id": id, "name": " Ada ", "phone": " 12345678 " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);

    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pending"], json!([]));
    assert_eq!(body["highscores"][0]["name"], "Ada");
    assert_eq!(body["highscores"][0]["phone"], "12345678");
    assert_eq!(body["highscores"][0]["time"], 126);
    assert!(body["highscores"][0]["date"].is_string());
}

#[tokio::test]
async fn test_register_unknown_id_is_404() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "id": "nonexistent-id", "name": "A", "phone": "B" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["highscores"], json!([]));
}

#[tokio::test]
async fn test_register_blank_name_is_400_and_keeps_pending() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let id = submit(&app, 10.0).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "id": id, "name": "   ", "phone": "555" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pending"][0]["id"], id.as_str());
}

#[tokio::test]
async fn test_leaderboard_stays_sorted_and_bounded() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    for t in 10..20 {
        let id = submit(&app, t as f64).await;
        let response = app
            .clone()
            .oneshot(post_json(
                "/register",
                json!({ "id": id, "name": "racer", "phone": "555" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // A faster time on a full board evicts the slowest entry
    let id = submit(&app, 5.0).await;
    app.clone()
        .oneshot(post_json(
            "/register",
            json!({ "id": id, "name": "fast", "phone": "555" }),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    let times: Vec<u64> = body["highscores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["time"].as_u64().unwrap())
        .collect();
    assert_eq!(times, vec![5, 10, 11, 12, 13, 14, 15, 16, 17, 18]);
}

// =============================================================================
// Dismissal Tests
// =============================================================================

#[tokio::test]
async fn test_dismiss_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let id = submit(&app, 10.0).await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/dismiss", json!({ "id": id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["ok"], true);
    }

    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pending"], json!([]));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();

    let pending_id;
    {
        let app = setup_app(&dir);
        let id = submit(&app, 30.0).await;
        app.clone()
            .oneshot(post_json(
                "/register",
                json!({ "id": id, "name": "Ada", "phone": "555" }),
            ))
            .await
            .unwrap();
        pending_id = submit(&app, 40.0).await;
    }

    // Same state file, fresh service
    let app = setup_app(&dir);
    let response = app.oneshot(get("/state")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["highscores"][0]["name"], "Ada");
    assert_eq!(body["pending"][0]["id"], pending_id.as_str());
    assert_eq!(body["pending"][0]["time"], 40);
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_and_app_js_served() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(&dir);

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/javascript"
    );
}
