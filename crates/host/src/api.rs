//! REST API for servo-web
//!
//! Health, panel presets, and the control journal.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use servo_web_protocol::ControlGroup;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::journal::CommandJournal;

// Shared state
#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<RwLock<CommandJournal>>,
    /// Origin handed to the panels through `/config.js`
    pub device_base: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            journal: Arc::new(RwLock::new(CommandJournal::new(config.journal.capacity))),
            device_base: config.server.device_base.clone(),
        }
    }
}

// Routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/panels", get(list_panels))
        .route("/commands", get(list_commands).delete(clear_commands))
}

// Handlers

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn list_panels() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "panels": ControlGroup::presets() }))
}

async fn list_commands(State(state): State<AppState>) -> Json<serde_json::Value> {
    let journal = state.journal.read().await;
    Json(serde_json::json!({
        "capacity": journal.capacity(),
        "commands": journal.entries(),
    }))
}

async fn clear_commands(State(state): State<AppState>) -> impl IntoResponse {
    state.journal.write().await.clear();
    tracing::info!("Control journal cleared");
    StatusCode::NO_CONTENT
}
