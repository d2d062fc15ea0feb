//! Static UI hosting and cross-origin behaviour of the router.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{test_config, test_router, TEST_API_KEY};
use http_body_util::BodyExt;
use std::path::PathBuf;
use tower::ServiceExt;

/// Create a throwaway UI directory containing `index.html`.
fn ui_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("relay-ui-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>Kindred</h1>").unwrap();
    dir
}

#[tokio::test]
async fn root_serves_index_html() {
    let dir = ui_dir();
    let app = test_router(test_config(
        "http://127.0.0.1:9",
        Some(TEST_API_KEY),
        &[("STATIC_DIR", dir.to_str().unwrap())],
    ));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>Kindred</h1>");

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let dir = ui_dir();
    let app = test_router(test_config(
        "http://127.0.0.1:9",
        Some(TEST_API_KEY),
        &[("STATIC_DIR", dir.to_str().unwrap())],
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/assets/missing.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn preflight_allows_any_origin_by_default() {
    let app = test_router(test_config("http://127.0.0.1:9", Some(TEST_API_KEY), &[]));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/generate")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn configured_origins_restrict_cors() {
    let app = test_router(test_config(
        "http://127.0.0.1:9",
        Some(TEST_API_KEY),
        &[("CORS_ALLOWED_ORIGINS", "http://kindred.test")],
    ));

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://kindred.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://kindred.test"
    );

    let denied = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://evil.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(!denied
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
