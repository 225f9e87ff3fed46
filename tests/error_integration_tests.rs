use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::Service;

use httperror::{http_error, AppError, HttpError};

// App with one handler per error path under test
fn create_test_app() -> Router {
    async fn missing() -> HttpError {
        http_error!(404, "no card with id {}", 7)
    }

    async fn teapot() -> HttpError {
        HttpError::im_a_teapot()
    }

    async fn fallible() -> Result<String, AppError> {
        Err(HttpError::too_many_requests().into())
    }

    async fn broken() -> Result<String, AppError> {
        Err(anyhow::anyhow!("connection pool exhausted").into())
    }

    Router::new()
        .route("/missing", get(missing))
        .route("/teapot", get(teapot))
        .route("/fallible", get(fallible))
        .route("/broken", get(broken))
}

// Helper to send request and parse JSON response
async fn send_json_request(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

#[tokio::test]
async fn test_handler_returning_http_error() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["status"], "Not Found");
    assert_eq!(body["message"], "no card with id 7");
}

#[tokio::test]
async fn test_handler_with_default_message() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "/teapot").await;

    assert_eq!(status, StatusCode::IM_A_TEAPOT);
    assert_eq!(body["code"], 418);
    assert_eq!(body["status"], "I'm a teapot");
    assert_eq!(body["message"], "I'm a teapot");
}

#[tokio::test]
async fn test_fallible_handler_keeps_structured_status() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "/fallible").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], 429);
    assert_eq!(body["status"], "Too Many Requests");
}

#[tokio::test]
async fn test_internal_error_does_not_leak_details() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "/broken").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert_eq!(body["message"], "Internal Server Error");
    assert!(!body["message"]
        .as_str()
        .unwrap()
        .contains("connection pool"));
}

#[tokio::test]
async fn test_response_content_type_is_json() {
    let mut app = create_test_app();
    let request = Request::builder()
        .method("GET")
        .uri("/missing")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_body_round_trips_through_serde() {
    let mut app = create_test_app();
    let (_, body) = send_json_request(&mut app, "/missing").await;

    let err: HttpError = serde_json::from_value(body).unwrap();
    assert_eq!(err, http_error!(404, "no card with id 7"));
}
