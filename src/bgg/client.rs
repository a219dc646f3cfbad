use std::time::Duration;

use async_trait::async_trait;

use crate::config::BggConfig;

use super::error::FetchError;
use super::raw::{parse_document, RawNode};
use super::GameSource;

/// Client for the BoardGameGeek XML API2 `/thing` endpoint
pub struct BggClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BggClient {
    pub fn new(config: &BggConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("board-game-lookup/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Fetch the raw `/thing` document for a game, including stats and versions
    async fn fetch_thing(&self, bgg_id: u64) -> Result<String, FetchError> {
        let token = self.token.as_deref().ok_or(FetchError::MissingToken)?;

        let response = self
            .http
            .get(format!("{}/thing", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("id", bgg_id.to_string()),
                ("type", "boardgame".to_string()),
                ("stats", "1".to_string()),
                ("versions", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                "BoardGameGeek thing fetch failed: {} - {}",
                status,
                error_text.chars().take(200).collect::<String>()
            );
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl GameSource for BggClient {
    fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    async fn fetch_game(&self, bgg_id: u64) -> Result<RawNode, FetchError> {
        tracing::info!("Fetching game {} from BoardGameGeek", bgg_id);

        let body = self.fetch_thing(bgg_id).await?;
        extract_item(&body, bgg_id)
    }
}

/// First `items/item` element of a `/thing` response
fn extract_item(body: &str, bgg_id: u64) -> Result<RawNode, FetchError> {
    parse_document(body)?
        .take_child("items")
        .and_then(|items| items.take_child("item"))
        .ok_or(FetchError::ItemNotFound(bgg_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::get,
        Router,
    };

    const THING_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="822">
        <name type="primary" sortindex="1" value="Carcassonne" />
        <minplayers value="2" />
        <maxplayers value="5" />
    </item>
</items>"#;

    /// What the fake upstream saw on its last request
    #[derive(Debug, Default)]
    struct SeenRequest {
        query: HashMap<String, String>,
        authorization: Option<String>,
    }

    type Seen = Arc<Mutex<SeenRequest>>;

    fn config(token: Option<&str>) -> BggConfig {
        config_at("http://127.0.0.1:9/xmlapi2/", token)
    }

    fn config_at(base_url: &str, token: Option<&str>) -> BggConfig {
        BggConfig {
            base_url: base_url.to_string(),
            token: token.map(String::from),
            timeout_secs: 1,
            language: "Polish".to_string(),
        }
    }

    async fn record_thing(
        State(seen): State<Seen>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> &'static str {
        let mut seen = seen.lock().unwrap();
        seen.query = query;
        seen.authorization = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        THING_XML
    }

    /// Serve `router` on an ephemeral local port and return its API base URL
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/xmlapi2/", addr)
    }

    #[test]
    fn test_is_configured_follows_token() {
        assert!(!BggClient::new(&config(None)).unwrap().is_configured());
        assert!(BggClient::new(&config(Some("secret"))).unwrap().is_configured());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BggClient::new(&config(None)).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9/xmlapi2");
    }

    #[tokio::test]
    async fn test_fetch_without_token_fails_before_network() {
        let client = BggClient::new(&config(None)).unwrap();
        let result = client.fetch_game(13).await;

        assert!(matches!(result, Err(FetchError::MissingToken)));
    }

    #[tokio::test]
    async fn test_fetch_sends_thing_query_with_bearer_token() {
        let seen = Seen::default();
        let router = Router::new()
            .route("/xmlapi2/thing", get(record_thing))
            .with_state(seen.clone());
        let base_url = spawn_upstream(router).await;

        let client = BggClient::new(&config_at(&base_url, Some("secret"))).unwrap();
        let item = client.fetch_game(822).await.unwrap();

        assert_eq!(item.name, "item");
        assert_eq!(item.attr("id"), Some("822"));
        assert_eq!(item.attr_at(&["maxplayers"], "value"), Some("5"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.query.get("id").map(String::as_str), Some("822"));
        assert_eq!(seen.query.get("type").map(String::as_str), Some("boardgame"));
        assert_eq!(seen.query.get("stats").map(String::as_str), Some("1"));
        assert_eq!(seen.query.get("versions").map(String::as_str), Some("1"));
        assert_eq!(seen.authorization.as_deref(), Some("Bearer secret"));
    }

    #[tokio::test]
    async fn test_fetch_maps_server_error_to_status() {
        let router = Router::new().route(
            "/xmlapi2/thing",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        );
        let base_url = spawn_upstream(router).await;

        let client = BggClient::new(&config_at(&base_url, Some("secret"))).unwrap();
        let result = client.fetch_game(822).await;

        match result {
            Err(FetchError::Status(status)) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_item_takes_first_item() {
        let body = r#"<items><item type="boardgame" id="13"/><item id="14"/></items>"#;
        let item = extract_item(body, 13).unwrap();

        assert_eq!(item.attr("id"), Some("13"));
    }

    #[test]
    fn test_extract_item_reports_empty_response() {
        let body = r#"<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse"></items>"#;

        assert!(matches!(
            extract_item(body, 99),
            Err(FetchError::ItemNotFound(99))
        ));
    }
}
