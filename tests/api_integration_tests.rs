//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle of each gateway route.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cachely::{api::create_router, cache::CacheStore, AppState};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(CacheStore::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/cachely/v1/objects")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/cachely/v1/objects/{}", key))
        .body(Body::empty())
        .unwrap()
}

fn delete_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/cachely/v1/objects/{}", key))
        .body(Body::empty())
        .unwrap()
}

// == PUT Tests ==

#[tokio::test]
async fn test_put_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(put_request(r#"{"key":"test_key","value":"dGVzdF92YWx1ZQ=="}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "test_key");
}

#[tokio::test]
async fn test_put_endpoint_conflict() {
    let app = create_test_app();

    let first = app
        .clone()
        .oneshot(put_request(r#"{"key":"a","value":"AQID"}"#))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(put_request(r#"{"key":"a","value":"CQ=="}"#))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_to_json(second.into_body()).await;
    assert_eq!(json["code"], 6);
    assert_eq!(json["message"], "existing cached item located at a");

    // Original payload is untouched
    let get = app.oneshot(get_request("a")).await.unwrap();
    let json = body_to_json(get.into_body()).await;
    assert_eq!(json["value"], "AQID");
}

#[tokio::test]
async fn test_put_endpoint_invalid_json() {
    let app = create_test_app();

    let response = app.oneshot(put_request(r#"{"key":"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"], 3);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_put_endpoint_invalid_base64() {
    let app = create_test_app();

    let response = app
        .oneshot(put_request(r#"{"key":"a","value":"***"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"], 3);
}

#[tokio::test]
async fn test_put_endpoint_form_content_type() {
    let app = create_test_app();

    // What `curl -d` sends by default
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cachely/v1/objects")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(r#"{"key":"a","value":"AQID"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("a")).await.unwrap();
    assert_eq!(body_to_json(response.into_body()).await["value"], "AQID");
}

#[tokio::test]
async fn test_put_endpoint_no_content_type() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cachely/v1/objects")
                .body(Body::from(r#"{"key":"a","value":"AQID"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_put_endpoint_empty_body() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cachely/v1/objects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "");

    // The empty key is now taken
    let response = app.oneshot(put_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// == GET Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app();

    let put = app
        .clone()
        .oneshot(put_request(r#"{"key":"get_key","value":"Z2V0X3ZhbHVl"}"#))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let response = app.oneshot(get_request("get_key")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "get_key");
    assert_eq!(json["value"], "Z2V0X3ZhbHVl");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get_request("nonexistent_key")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["code"], 5);
    assert_eq!(json["error"], "could not find key nonexistent_key");
    assert_eq!(json["message"], "could not find key nonexistent_key");
    assert_eq!(json["details"], serde_json::json!([]));
}

#[tokio::test]
async fn test_get_endpoint_percent_encoded_key() {
    let app = create_test_app();

    let put = app
        .clone()
        .oneshot(put_request(r#"{"key":"a b","value":"AA=="}"#))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let response = app.oneshot(get_request("a%20b")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "a b");
}

// == DELETE Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = create_test_app();

    let put = app
        .clone()
        .oneshot(put_request(r#"{"key":"delete_key","value":"AA=="}"#))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let response = app.clone().oneshot(delete_request("delete_key")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "delete_key");

    let response = app.oneshot(get_request("delete_key")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_endpoint_not_found() {
    let app = create_test_app();

    let response = app.oneshot(delete_request("nonexistent_key")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Lifecycle Tests ==

#[tokio::test]
async fn test_full_key_lifecycle() {
    let app = create_test_app();

    // Put("a", [1,2,3])
    let response = app
        .clone()
        .oneshot(put_request(r#"{"key":"a","value":"AQID"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Get("a") -> [1,2,3]
    let response = app.clone().oneshot(get_request("a")).await.unwrap();
    assert_eq!(body_to_json(response.into_body()).await["value"], "AQID");

    // Put("a", [9]) -> AlreadyExists
    let response = app
        .clone()
        .oneshot(put_request(r#"{"key":"a","value":"CQ=="}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Delete("a")
    let response = app.clone().oneshot(delete_request("a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Get("a") and Delete("a") -> NotFound
    let response = app.clone().oneshot(get_request("a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app.clone().oneshot(delete_request("a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Key is free again
    let response = app
        .clone()
        .oneshot(put_request(r#"{"key":"a","value":"CQ=="}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = app.oneshot(get_request("a")).await.unwrap();
    assert_eq!(body_to_json(response.into_body()).await["value"], "CQ==");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_puts_single_winner() {
    const CALLERS: usize = 24;
    let app = create_test_app();

    let mut handles = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.oneshot(put_request(r#"{"key":"race","value":"AQ=="}"#))
                .await
                .unwrap()
                .status()
        }));
    }

    let mut ok = 0;
    let mut conflict = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => ok += 1,
            StatusCode::CONFLICT => conflict += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(conflict, CALLERS - 1);
}

// == Health Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
