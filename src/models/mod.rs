pub mod game;
pub mod static_games;

pub use game::{demo_game, GameDetails, PlayerRange, PlaytimeRange, SearchResponse};
pub use static_games::{find_static_game, StaticGameEntry, STATIC_GAMES};
