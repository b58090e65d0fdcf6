use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    /// Discord snowflake, serialized as a string to survive JS number precision.
    pub discord_id: Option<String>,
    pub email: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub username: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PreferencesDto {
    /// All stored preferences keyed by preference name.
    #[schema(value_type = Object)]
    pub preferences: HashMap<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetPreferenceDto {
    /// Arbitrary JSON value to store under the key.
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PreferenceDto {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}
