use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub bind_addr: std::net::SocketAddr,

    pub game_data_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr_raw =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: bind_addr_raw,
            })?;

        let game_data_api_url = std::env::var("GAME_DATA_API_URL").ok();

        Ok(Self {
            database_url,
            bind_addr,
            game_data_api_url,
        })
    }
}
