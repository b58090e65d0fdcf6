//! Third-party game-data API client with exponential-backoff retry.
//!
//! `GameDataClient` fetches character profiles from an external game-data
//! service. Transient failures are retried up to three times with exponential
//! backoff (1 s, 2 s, 4 s); a 404 is returned immediately since retrying a
//! missing character cannot succeed.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// Error type for game-data lookups.
#[derive(Debug, Error)]
pub enum GameDataError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned an unexpected non-2xx status code.
    #[error("Game-data API returned HTTP {0}")]
    HttpStatus(u16),

    /// The character does not exist upstream.
    #[error("Character not found in game-data API")]
    NotFound,
}

/// Character profile as returned by the game-data API.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CharacterProfile {
    pub name: String,
    pub class: Option<String>,
    pub level: Option<i32>,
}

/// Client for the external game-data API.
#[derive(Clone)]
pub struct GameDataClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameDataClient {
    /// Creates a new client for the given API base URL.
    ///
    /// # Arguments
    /// - `base_url` - API root, without a trailing slash
    /// - `client` - Shared reqwest client (configured with timeouts at startup)
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Fetches a character profile, retrying transient failures.
    ///
    /// # Arguments
    /// - `game` - Game slug
    /// - `name` - Character name
    ///
    /// # Returns
    /// - `Ok(CharacterProfile)` - Profile data from the API
    /// - `Err(GameDataError::NotFound)` - The API does not know the character
    /// - `Err(GameDataError)` - All retry attempts failed
    pub async fn get_character_profile(
        &self,
        game: &str,
        name: &str,
    ) -> Result<CharacterProfile, GameDataError> {
        let url = format!("{}/api/games/{}/characters/{}", self.base_url, game, name);

        let mut last_err: Option<GameDataError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.try_fetch(&url).await {
                Ok(profile) => return Ok(profile),
                // A missing character will still be missing after a retry.
                Err(GameDataError::NotFound) => return Err(GameDataError::NotFound),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        url,
                        error = %e,
                        "Game-data lookup attempt failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.try_fetch(&url).await {
            Ok(profile) => Ok(profile),
            Err(e) => Err(last_err.unwrap_or(e)),
        }
    }

    /// Performs one fetch attempt without retry.
    async fn try_fetch(&self, url: &str) -> Result<CharacterProfile, GameDataError> {
        let response = self.client.get(url).send().await?;

        if response.status().as_u16() == 404 {
            return Err(GameDataError::NotFound);
        }

        if !response.status().is_success() {
            return Err(GameDataError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.json::<CharacterProfile>().await?)
    }
}
