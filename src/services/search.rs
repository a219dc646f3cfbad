use crate::error::AppError;
use crate::models::{SearchResponse, StaticGameEntry, STATIC_GAMES};

/// Upper bound on returned search hits
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Case-insensitive substring search over local and original names
pub fn search_games(query: Option<&str>) -> Result<SearchResponse, AppError> {
    search_in(STATIC_GAMES, query)
}

fn search_in(games: &[StaticGameEntry], query: Option<&str>) -> Result<SearchResponse, AppError> {
    let query = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::validation("Parameter 'name' is required (e.g. ?name=azul)"))?;

    let needle = query.to_lowercase();

    let results: Vec<_> = games
        .iter()
        .filter(|game| {
            game.name.to_lowercase().contains(&needle)
                || game.original_name.to_lowercase().contains(&needle)
        })
        .take(MAX_SEARCH_RESULTS)
        .map(StaticGameEntry::to_search_result)
        .collect();

    tracing::debug!("Search '{}' matched {} game(s)", query, results.len());

    Ok(SearchResponse {
        query: query.to_string(),
        total: results.len(),
        results,
    })
}
