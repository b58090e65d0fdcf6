//! Raid Ledger server binary.
//!
//! Startup sequence: load configuration, connect and migrate the database,
//! build the session and rate-limiting layers, then serve the API router.

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

/// Sustained request rate per client IP (requests per second).
const RATE_LIMIT_PER_SECOND: u64 = 10;

/// Burst allowance per client IP before requests are rejected with 429.
const RATE_LIMIT_BURST: u32 = 30;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::session_layer(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let game_data = startup::setup_game_data_client(&config, http_client.clone());

    if game_data.is_none() {
        tracing::info!("GAME_DATA_API_URL not set, character metadata lookups disabled");
    }

    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(RATE_LIMIT_PER_SECOND)
            .burst_size(RATE_LIMIT_BURST)
            .finish()
            .ok_or_else(|| AppError::InternalError("Invalid rate limit config".to_string()))?,
    );

    let state = AppState::new(db, game_data);

    let app = router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .layer(GovernorLayer::new(governor_config));

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
