use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{models::STATIC_GAMES, AppState};

/// Liveness probe; also reports which lookup sources are available
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "sources": {
            "static_games": STATIC_GAMES.len(),
            "bgg_configured": state.lookup.source_configured(),
        }
    }))
}
