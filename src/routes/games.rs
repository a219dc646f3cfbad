use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::{self, GameDetails, SearchResponse},
    services, AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

/// Fixed sample game for front-end smoke tests
pub async fn demo_game() -> Json<GameDetails> {
    Json(models::demo_game())
}

/// Search the static dataset by name fragment: /api/games/search?name=...
pub async fn search_games(
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = services::search_games(params.name.as_deref())?;
    Ok(Json(response))
}

/// Look up a game by BoardGameGeek id: static dataset first, then the API
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GameDetails>, AppError> {
    let bgg_id = parse_game_id(&id)?;
    let game = state.lookup.find(bgg_id).await?;
    Ok(Json(game))
}

fn parse_game_id(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation("Invalid game id"))
}
