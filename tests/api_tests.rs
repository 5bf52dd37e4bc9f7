//! Router tests for the classification endpoints

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use libadmin_errors::{api, AppConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(AppConfig::default()).expect("Failed to build state");
    api::create_router(state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_with_builtin_catalog() {
    let response = app()
        .oneshot(Request::get("/api/v1/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_classify_not_found() {
    let (status, body) = post_json(
        app(),
        "/api/v1/errors/classify",
        json!({"statusCode": 404, "body": {"message": "Book not found"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Không tìm thấy sách");
    assert_eq!(body["category"], "NOT_FOUND");
    assert_eq!(body["severity"], "warning");
    assert_eq!(body["requiresLogin"], false);
}

#[tokio::test]
async fn test_classify_session_expired() {
    let (_, body) = post_json(
        app(),
        "/api/v1/errors/classify",
        json!({"statusCode": 401, "body": {"errorCode": "UNAUTHORIZED"}}),
    )
    .await;

    assert_eq!(body["category"], "AUTH");
    assert_eq!(body["severity"], "error");
    assert_eq!(body["requiresLogin"], true);
}

#[tokio::test]
async fn test_classify_default_message() {
    let (_, body) = post_json(
        app(),
        "/api/v1/errors/classify",
        json!({"statusCode": 418, "defaultMessage": "Không thể tải danh sách sách"}),
    )
    .await;
    assert_eq!(body["message"], "Không thể tải danh sách sách");
    assert_eq!(body["category"], "UNKNOWN");

    let (_, body) = post_json(app(), "/api/v1/errors/classify", json!({"statusCode": 418})).await;
    assert_eq!(body["message"], "Đã xảy ra lỗi. Vui lòng thử lại.");
}

#[tokio::test]
async fn test_classify_network_and_timeout() {
    let (_, body) = post_json(app(), "/api/v1/errors/classify", json!({})).await;
    assert_eq!(body["category"], "NETWORK");

    let (_, body) = post_json(app(), "/api/v1/errors/classify", json!({"isTimeout": true})).await;
    assert_eq!(body["category"], "TIMEOUT");
}

#[tokio::test]
async fn test_translate() {
    let (status, body) = post_json(
        app(),
        "/api/v1/errors/translate",
        json!({"message": "Borrow limit exceeded"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vượt quá giới hạn mượn sách");
}

#[tokio::test]
async fn test_translate_rejects_empty() {
    let (status, body) = post_json(app(), "/api/v1/errors/translate", json!({"message": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}
