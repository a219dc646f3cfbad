use serde::{Deserialize, Serialize};

/// Min/max player count, with the community's preferred count when known
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerRange {
    pub min: u32,
    pub max: u32,
    pub best: Option<u32>,
}

impl PlayerRange {
    /// Values are kept as given; an unknown bound stays 0
    pub fn new(min: u32, max: u32, best: Option<u32>) -> Self {
        Self { min, max, best }
    }
}

/// Playing time in minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaytimeRange {
    pub min: u32,
    pub max: u32,
}

impl PlaytimeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Canonical game record returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub id: u64,
    pub name_pl: String,
    pub name_original: String,
    pub rating: f64,
    pub bayes_rating: f64,
    pub complexity: f64,
    pub players: PlayerRange,
    pub playtime: PlaytimeRange,
    pub summary_pl: String,
}

/// Search hit; carries the publication year but no summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: u64,
    pub name_pl: String,
    pub name_original: String,
    pub year_published: u16,
    pub rating: f64,
    pub complexity: f64,
    pub players: PlayerRange,
    pub playtime: PlaytimeRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchResult>,
}

/// Fixed sample served to the companion page for smoke testing
pub fn demo_game() -> GameDetails {
    GameDetails {
        id: 12345,
        name_pl: "Wsiąść do Pociągu".to_string(),
        name_original: "Ticket to Ride".to_string(),
        rating: 7.43,
        bayes_rating: 7.35,
        complexity: 2.35,
        players: PlayerRange::new(2, 5, Some(3)),
        playtime: PlaytimeRange::new(30, 60),
        summary_pl: "Rodzinna gra planszowa o budowaniu linii kolejowych. Proste zasady, \
                     szybka rozgrywka, świetna na początek przygody z planszówkami."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_range_keeps_unknown_max() {
        let range = PlayerRange::new(3, 0, None);
        assert_eq!(range.min, 3);
        assert_eq!(range.max, 0);

        let range = PlayerRange::new(2, 5, Some(4));
        assert_eq!((range.min, range.max, range.best), (2, 5, Some(4)));
    }

    #[test]
    fn test_playtime_range_keeps_unknown_max() {
        let range = PlaytimeRange::new(90, 0);
        assert_eq!((range.min, range.max), (90, 0));
    }

    #[test]
    fn test_game_details_serializes_camel_case() {
        let json = serde_json::to_value(demo_game()).unwrap();

        assert_eq!(json["id"], 12345);
        assert_eq!(json["namePl"], "Wsiąść do Pociągu");
        assert_eq!(json["nameOriginal"], "Ticket to Ride");
        assert_eq!(json["bayesRating"], 7.35);
        assert_eq!(json["players"]["best"], 3);
        assert_eq!(json["playtime"]["max"], 60);
        assert!(json["summaryPl"].as_str().unwrap().starts_with("Rodzinna"));
    }

    #[test]
    fn test_absent_best_players_serializes_as_null() {
        let mut game = demo_game();
        game.players = PlayerRange::new(1, 4, None);

        let json = serde_json::to_value(&game).unwrap();
        assert!(json["players"]["best"].is_null());
    }

    #[test]
    fn test_search_result_has_no_summary() {
        let result = SearchResult {
            id: 13,
            name_pl: "Catan".to_string(),
            name_original: "Catan".to_string(),
            year_published: 1995,
            rating: 7.09,
            complexity: 2.29,
            players: PlayerRange::new(3, 4, Some(4)),
            playtime: PlaytimeRange::new(60, 120),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["yearPublished"], 1995);
        assert!(json.get("summaryPl").is_none());
    }
}
