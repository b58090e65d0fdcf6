//! User domain models and parameters.
//!
//! Provides domain models for application users and their stored preferences.
//! Discord IDs are stored as strings in the database and parsed to `u64` at the
//! repository boundary.

use chrono::{DateTime, Utc};

use crate::{
    dto::user::{PreferenceDto, UserDto},
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Application user account.
///
/// An account is linked to a Discord identity, a local email credential, or
/// both. Password hashes never leave the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Display name of the user.
    pub username: String,
    /// Discord ID of the user, when the account is linked to Discord.
    pub discord_id: Option<u64>,
    /// Email address for local-credential accounts.
    pub email: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert stored
    ///   Discord ID from String to u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = entity
            .discord_id
            .map(parse_u64_from_string)
            .transpose()?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            discord_id,
            email: entity.email,
            created_at: entity.created_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            discord_id: self.discord_id.map(|id| id.to_string()),
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// A stored per-user preference.
///
/// Values are opaque JSON set by the client (UI layout, timezone, filters);
/// the server only enforces the one-row-per-key invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    /// Preference key, unique per user.
    pub key: String,
    /// Stored JSON value.
    pub value: serde_json::Value,
}

impl Preference {
    /// Converts an entity model to a preference domain model.
    ///
    /// # Returns
    /// - `Ok(Preference)` - The converted preference
    /// - `Err(AppError::InternalErr(MalformedPreference))` - The stored value
    ///   is not valid JSON
    pub fn from_entity(entity: entity::user_preference::Model) -> Result<Self, AppError> {
        let value = serde_json::from_str(&entity.value).map_err(|e| {
            InternalError::MalformedPreference {
                key: entity.key.clone(),
                source: e,
            }
        })?;

        Ok(Self {
            key: entity.key,
            value,
        })
    }

    pub fn into_dto(self) -> PreferenceDto {
        PreferenceDto {
            key: self.key,
            value: self.value,
        }
    }
}
