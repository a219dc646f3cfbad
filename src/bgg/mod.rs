// BoardGameGeek XML API2 integration

pub mod client;
pub mod error;
pub mod normalize;
pub mod raw;

use async_trait::async_trait;

pub use client::BggClient;
pub use error::FetchError;
pub use normalize::normalize;
pub use raw::RawNode;

/// External source of raw game records
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Whether credentials for the source are present
    fn is_configured(&self) -> bool;

    /// Fetch the raw `item` record for a game
    async fn fetch_game(&self, bgg_id: u64) -> Result<RawNode, FetchError>;
}
