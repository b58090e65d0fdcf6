//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::service::game_data::GameDataClient;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `GameDataClient` wraps a `reqwest::Client`, which is `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the third-party game-data API.
    ///
    /// `None` when no `GAME_DATA_API_URL` is configured; character metadata
    /// lookups are skipped in that case.
    pub game_data: Option<GameDataClient>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `game_data` - Optional game-data API client
    pub fn new(db: DatabaseConnection, game_data: Option<GameDataClient>) -> Self {
        Self { db, game_data }
    }
}
