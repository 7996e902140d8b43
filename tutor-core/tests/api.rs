mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use tutor_core::answer::{ERROR_INFO_URL, FALLBACK_ANSWER, GENERAL_INFO_URL};
use tutor_core::server::router;
use tutor_core::CorpusStore;

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn answers_with_forum_link() {
    let app = router(common::assistant(false, common::forum_store()));

    let (status, body) = post_json(app, "/api/", json!({"question": "What is pandas?"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], common::ANSWER);
    let links = body["links"].as_array().unwrap();
    assert!(links.contains(&json!({"url": "https://forum/1", "text": "pandas intro"})));
    assert!(!links.iter().any(|l| l["url"] == "https://forum/2"));
}

#[tokio::test]
async fn route_without_trailing_slash() {
    let app = router(common::assistant(false, common::forum_store()));

    let (status, _) = post_json(app, "/api", json!({"question": "What is pandas?"})).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_image_is_bad_request() {
    let app = router(common::assistant(false, common::forum_store()));

    let (status, body) = post_json(
        app,
        "/api/",
        json!({"question": "What is pandas?", "image": "not-valid-base64!!"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Invalid base64 image"));
}

#[tokio::test]
async fn valid_image_without_links_returns_no_links() {
    let app = router(common::assistant(false, CorpusStore::empty()));

    let (status, body) = post_json(
        app,
        "/api/",
        json!({"question": "What does this error mean?", "image": "aGVsbG8gd29ybGQ="}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["links"], json!([]));
}

#[tokio::test]
async fn llm_failure_still_returns_ok() {
    let app = router(common::assistant(true, common::forum_store()));

    let (status, body) = post_json(app, "/api/", json!({"question": "What is pandas?"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], FALLBACK_ANSWER);
    let links = body["links"].as_array().unwrap();
    assert!(links.iter().any(|l| l["url"] == ERROR_INFO_URL && l["text"] == "Error details"));
}

#[tokio::test]
async fn empty_corpora_get_generic_link() {
    let app = router(common::assistant(false, CorpusStore::empty()));

    let (status, body) = post_json(app, "/api/", json!({"question": "What is pandas?"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["links"],
        json!([{"url": GENERAL_INFO_URL, "text": "General course information"}])
    );
}

#[tokio::test]
async fn empty_question_does_not_crash() {
    let app = router(common::assistant(false, common::forum_store()));

    let (status, body) = post_json(app, "/api/", json!({"question": ""})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], common::ANSWER);
    assert_eq!(
        body["links"],
        json!([{"url": GENERAL_INFO_URL, "text": "General course information"}])
    );
}

#[tokio::test]
async fn missing_question_is_rejected() {
    let app = router(common::assistant(false, common::forum_store()));

    let (status, _) = post_json(app, "/api/", json!({"image": "aGVsbG8="})).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn health_reports_corpus_sizes() {
    let app = router(common::assistant(false, common::forum_store()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok", "course_records": 1, "forum_records": 2}));
}
