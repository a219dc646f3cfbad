pub mod games;
pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games/demo", get(games::demo_game))
        .route("/games/search", get(games::search_games))
        .route("/games/{id}", get(games::get_game))
}
