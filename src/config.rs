use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub bgg: BggConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    /// Directory with the companion page, served as the router fallback
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BggConfig {
    pub base_url: String,
    /// Bearer token for the XML API; lookups outside the static set need it
    pub token: Option<String>,
    pub timeout_secs: u64,
    /// Language whose version name becomes the localized name
    pub language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            static_dir: non_empty_var("STATIC_DIR"),
        };

        let bgg = BggConfig {
            base_url: env::var("BGG_BASE_URL")
                .unwrap_or_else(|_| "https://boardgamegeek.com/xmlapi2".to_string()),
            token: non_empty_var("BGG_TOKEN"),
            timeout_secs: env::var("BGG_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .context("BGG_TIMEOUT_SECS must be a number")?,
            language: env::var("BGG_LANGUAGE")
                .unwrap_or_else(|_| "Polish".to_string()),
        };

        Ok(Config { server, bgg })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Read an environment variable, treating blank values as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
