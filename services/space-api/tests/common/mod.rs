#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use space_api::{routes::create_router, AppState, Config};
use tower::util::ServiceExt;
use wiremock::MockServer;

/// Router over a config with no usable upstream keys.
pub fn degraded_app() -> Router {
    app_with(Config::default())
}

pub fn app_with(config: Config) -> Router {
    create_router(AppState::new(config).expect("Failed to build app state"))
}

/// Config pointing both upstreams at the mock server with live-looking keys.
pub fn live_config(server: &MockServer) -> Config {
    Config {
        nasa_api_key: "live-nasa-key".to_string(),
        hf_api_key: "hf_live".to_string(),
        nasa_apod_url: format!("{}/planetary/apod", server.uri()),
        hf_inference_url: format!("{}/models", server.uri()),
        nasa_timeout_secs: 1,
        ..Config::default()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}
