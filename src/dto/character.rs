use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub game: String,
    pub name: String,
    pub class: Option<String>,
    /// One of `tank`, `healer`, `dps`.
    pub role: Option<String>,
    pub is_main: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCharacterDto {
    /// Lowercase game slug, e.g. `wow-classic`.
    pub game: String,
    pub name: String,
    pub class: Option<String>,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub class: Option<String>,
    pub role: Option<String>,
}
