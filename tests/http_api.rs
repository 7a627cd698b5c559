// Integration tests for the HTTP surface, driving the router directly with
// tower's oneshot so no listener is needed.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use imdb_sentiment::server::{create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> axum::Router {
    let fixture = common::write_artifacts();
    let pipeline = common::build_pipeline(&fixture);
    create_router(AppState {
        pipeline: Arc::new(pipeline),
    })
}

fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn predict_labels_a_positive_review() {
    let response = app()
        .oneshot(predict_request(
            r#"{"review": "This movie was absolutely wonderful, I loved it!"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sentiment"], "positive");
    assert!(body["positive_proba"].as_f64().unwrap() > body["negative_proba"].as_f64().unwrap());
}

#[tokio::test]
async fn predict_labels_a_negative_review() {
    let response = app()
        .oneshot(predict_request(
            r#"{"review": "Terrible film, a complete waste of time."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sentiment"], "negative");
    assert!(body["negative_proba"].as_f64().unwrap() > body["positive_proba"].as_f64().unwrap());
}

#[tokio::test]
async fn predict_accepts_an_empty_review() {
    let response = app()
        .oneshot(predict_request(r#"{"review": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let sentiment = body["sentiment"].as_str().unwrap();
    assert!(sentiment == "positive" || sentiment == "negative");
}

#[tokio::test]
async fn predict_rejects_a_missing_review_field() {
    let response = app()
        .oneshot(predict_request(r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn predict_rejects_a_non_string_review() {
    let response = app()
        .oneshot(predict_request(r#"{"review": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn predict_rejects_a_non_json_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from("review=hello"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    // No JSON content type at all: axum rejects before deserializing.
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
