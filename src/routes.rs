use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::language::Language;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.system_config.static_dir.clone();

    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // REST API routes
        .route("/api/languages", get(list_languages))
        .route("/api/convert", post(handlers::convert))
        // The single page and its assets
        .fallback_service(ServeDir::new(static_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// The supported language set, in selector order, with the canonical
/// identifier each one highlights as. The page builds both selectors from
/// this so the enum stays the only source of truth.
async fn list_languages() -> Json<Value> {
    let languages: Vec<Value> = Language::ALL
        .iter()
        .map(|lang| {
            json!({
                "name": lang.display_name(),
                "highlight": lang.highlight_id(),
            })
        })
        .collect();
    Json(json!(languages))
}
