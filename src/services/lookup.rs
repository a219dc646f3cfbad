use std::sync::Arc;

use crate::bgg::{normalize, GameSource};
use crate::error::AppError;
use crate::models::{find_static_game, GameDetails};

/// Resolves game ids against the static set first, then BoardGameGeek
pub struct GameLookup {
    source: Arc<dyn GameSource>,
    language: String,
}

impl GameLookup {
    pub fn new(source: Arc<dyn GameSource>, language: impl Into<String>) -> Self {
        Self {
            source,
            language: language.into(),
        }
    }

    pub fn source_configured(&self) -> bool {
        self.source.is_configured()
    }

    pub async fn find(&self, bgg_id: u64) -> Result<GameDetails, AppError> {
        if let Some(game) = find_static_game(bgg_id) {
            tracing::debug!("Game {} served from static dataset", bgg_id);
            return Ok(game.to_details());
        }

        if !self.source.is_configured() {
            tracing::warn!(
                "Game {} not in static dataset and BoardGameGeek is not configured",
                bgg_id
            );
            return Err(AppError::SourceUnavailable);
        }

        let item = self.source.fetch_game(bgg_id).await?;
        Ok(normalize(&item, &self.language))
    }
}
