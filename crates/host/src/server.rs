//! HTTP surface: panel pages, `/config.js`, control routes and the API

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::api::{self, AppState};
use crate::control;
use crate::embedded;

/// Build the full router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/config.js", get(serve_config_js))
        .merge(control::control_router())
        .nest("/api", api::api_router())
        .fallback(serve_static)
        .with_state(state)
}

/// Serve index.html at root
async fn serve_index() -> Response {
    serve_asset("index.html")
}

/// Serve /config.js with the device origin for the panels
async fn serve_config_js(State(state): State<AppState>) -> Response {
    let base = serde_json::to_string(&state.device_base).unwrap_or_else(|_| "\"\"".into());
    let js = format!("window.SERVO_WEB_CONFIG = {{ deviceBase: {base} }};");
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        js,
    )
        .into_response()
}

/// Serve embedded static file
async fn serve_static(uri: Uri) -> Response {
    serve_asset(uri.path())
}

fn serve_asset(path: &str) -> Response {
    match embedded::get_asset(path) {
        Some((data, mime)) => {
            // wasm-bindgen glue must be served as a module script
            let content_type = if std::path::Path::new(path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
            {
                "application/javascript"
            } else {
                mime
            };
            (
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, "public, max-age=3600"),
                ],
                data,
            )
                .into_response()
        }
        None => {
            tracing::debug!(path, "Asset not found");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
