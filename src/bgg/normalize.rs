use crate::models::{GameDetails, PlayerRange, PlaytimeRange};

use super::raw::{coerce_count, coerce_number, RawNode};

/// Original name used when the record carries no usable name entry
pub const UNKNOWN_NAME: &str = "Unknown name";

/// Poll that carries per-player-count votes
const PLAYER_COUNT_POLL: &str = "suggested_numplayers";
/// Vote weights for the best-player-count score
const BEST_WEIGHT: f64 = 3.0;
const RECOMMENDED_WEIGHT: f64 = 2.0;

/// Convert a BoardGameGeek `item` element into a [`GameDetails`].
///
/// Never fails: any missing or malformed field falls back to its default, so an
/// empty node yields a blank record with id 0.
pub fn normalize(item: &RawNode, language: &str) -> GameDetails {
    let name_original = original_name(item);
    let name_pl = localized_name(item, language).unwrap_or_else(|| name_original.clone());

    let players = PlayerRange::new(
        coerce_count(item.attr_at(&["minplayers"], "value")),
        coerce_count(item.attr_at(&["maxplayers"], "value")),
        best_player_count(item),
    );
    let playtime = PlaytimeRange::new(
        coerce_count(item.attr_at(&["minplaytime"], "value")),
        coerce_count(item.attr_at(&["maxplaytime"], "value")),
    );

    // No translation step yet: the localized summary is the cleaned English description
    let summary_pl = clean_description(item.text_at(&["description"]).unwrap_or(""));

    GameDetails {
        id: coerce_number(item.attr("id")) as u64,
        name_pl,
        name_original,
        rating: item.number_at(&["statistics", "ratings", "average"], "value"),
        bayes_rating: item.number_at(&["statistics", "ratings", "bayesaverage"], "value"),
        complexity: item.number_at(&["statistics", "ratings", "averageweight"], "value"),
        players,
        playtime,
        summary_pl,
    }
}

/// Primary name entry, else the first one
fn original_name(item: &RawNode) -> String {
    item.children_named("name")
        .find(|n| n.attr("type") == Some("primary"))
        .or_else(|| item.child("name"))
        .and_then(|n| n.attr("value"))
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

/// Name of the first version published in `language`, in source order
fn localized_name(item: &RawNode, language: &str) -> Option<String> {
    let versions = item.descend(&["versions"])?;

    versions
        .children_named("item")
        .filter(|version| {
            version
                .children_named("link")
                .any(|l| l.attr("type") == Some("language") && l.attr("value") == Some(language))
        })
        .find_map(|version| {
            version
                .attr("value")
                .filter(|v| !v.is_empty())
                .or_else(|| version.attr_at(&["name"], "value").filter(|v| !v.is_empty()))
        })
        .map(str::to_string)
}

/// Player count with the highest weighted poll score.
///
/// Buckets are scanned left to right and only a strictly higher score replaces
/// the current pick, so ties keep the earliest bucket.
fn best_player_count(item: &RawNode) -> Option<u32> {
    let poll = item
        .children_named("poll")
        .find(|p| p.attr("name") == Some(PLAYER_COUNT_POLL))?;

    let mut best: Option<(f64, u32)> = None;

    for bucket in poll.children_named("results") {
        let Some(players) = bucket.attr("numplayers").and_then(parse_player_label) else {
            continue;
        };

        let score = votes(bucket, "Best") * BEST_WEIGHT
            + votes(bucket, "Recommended") * RECOMMENDED_WEIGHT;

        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, players));
        }
    }

    best.map(|(_, players)| players)
}

/// Plain non-negative integer labels only ("4" but not "4+")
fn parse_player_label(label: &str) -> Option<u32> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // digits only, so the parse can only fail on overflow; saturate and keep the bucket
    Some(label.parse().unwrap_or(u32::MAX))
}

fn votes(bucket: &RawNode, value: &str) -> f64 {
    let result = bucket
        .children_named("result")
        .find(|r| r.attr("value") == Some(value));
    coerce_number(result.and_then(|r| r.attr("numvotes")))
}

/// Flatten line breaks, decode `&quot;` and `&amp;`, and trim.
pub fn clean_description(raw: &str) -> String {
    raw.replace("&#10;", " ")
        .replace('\n', " ")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
