//! Common test utilities
#![allow(dead_code)] // Not every helper is used by every test file

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use servo_web_host::api::AppState;
use servo_web_host::config::Config;
use servo_web_host::server;
use tower::ServiceExt;

/// Router plus a handle on its state, built from `config`
pub fn app_with(config: &Config) -> (Router, AppState) {
    let state = AppState::new(config);
    (server::app(state.clone()), state)
}

pub fn app() -> (Router, AppState) {
    app_with(&Config::default())
}

/// Send one request through the router and collect the body
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri).await
}

pub async fn get_json(app: &Router, uri: &str) -> serde_json::Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri} -> {status}: {body}");
    serde_json::from_str(&body).unwrap()
}
