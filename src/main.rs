mod bgg;
mod config;
mod error;
mod models;
mod routes;
mod services;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::HeaderValue, Router};
use bgg::BggClient;
use config::Config;
use services::GameLookup;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub lookup: GameLookup,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_game_lookup=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting board game lookup server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // One shared HTTP client for BoardGameGeek, with the fixed request timeout
    let client = BggClient::new(&config.bgg).context("Failed to build BoardGameGeek client")?;
    let lookup = GameLookup::new(Arc::new(client), config.bgg.language.clone());
    if lookup.source_configured() {
        tracing::info!("BoardGameGeek API configured ({})", config.bgg.base_url);
    } else {
        tracing::warn!("BGG_TOKEN not set; only the static dataset is available");
    }

    let state = Arc::new(AppState { lookup });

    // Configure CORS for the companion page
    let origin: HeaderValue = config
        .server
        .frontend_url
        .parse()
        .context("FRONTEND_URL must be a valid origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let mut app = Router::new().merge(routes::create_routes());

    // Serve the companion page, if one is configured
    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    let app = app
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game lookup: http://{}/api/games/{{id}}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
