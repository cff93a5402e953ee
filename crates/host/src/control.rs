//! Loopback control console
//!
//! Accepts the same paths the device server does, logs them and keeps them
//! in the journal. Nothing is driven; this lets the panels be exercised
//! without hardware attached.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use servo_web_protocol::ControlPath;

use crate::api::AppState;

pub fn control_router() -> Router<AppState> {
    Router::new()
        .route("/pwm/*rest", get(accept_control))
        .route("/pos/*rest", get(accept_control))
        .route("/upper_servo/*rest", get(accept_control))
        .route("/lower_servo/*rest", get(accept_control))
}

#[tracing::instrument(skip_all, fields(uri = %uri), level = "debug")]
async fn accept_control(State(state): State<AppState>, uri: Uri) -> Response {
    match uri.path().parse::<ControlPath>() {
        Ok(command) => {
            tracing::info!(path = %command, "Control request");
            let seq = state.journal.write().await.record(command);
            tracing::debug!(seq, "Journaled");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::warn!(path = uri.path(), error = %e, "Rejected control path");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
