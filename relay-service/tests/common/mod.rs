#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use relay_service::config::RelayConfig;
use relay_service::startup::{build_router, AppState};
use serde_json::Value;
use service_core::config::Config;
use std::collections::HashMap;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-api-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// Relay configuration pointing at `upstream` (a mock server URI).
pub fn test_config(upstream: &str, api_key: Option<&str>, extra: &[(&str, &str)]) -> RelayConfig {
    let mut vars: HashMap<String, String> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.insert("GEMINI_API_BASE".to_string(), format!("{}/v1beta", upstream));
    if let Some(key) = api_key {
        vars.insert("GEMINI_API_KEY".to_string(), key.to_string());
    }

    RelayConfig::from_lookup(Config { port: 0 }, |key| vars.get(key).cloned())
        .expect("Failed to build test config")
}

pub fn test_router(config: RelayConfig) -> Router {
    let state = AppState::from_config(config).expect("Failed to build app state");
    build_router(state)
}

pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// POST a raw body to `/api/generate` and return status plus parsed JSON.
pub async fn post_raw(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, read_json(response).await)
}

pub async fn post_generate(app: &Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}
