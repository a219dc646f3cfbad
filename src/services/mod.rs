pub mod lookup;
pub mod search;

pub use lookup::GameLookup;
pub use search::search_games;
