use sea_orm::DatabaseConnection;

use crate::{
    data::{user::UserRepository, user_preference::UserPreferenceRepository},
    error::AppError,
    model::user::{Preference, User},
};

/// Maximum length of a display name.
const MAX_USERNAME_LEN: usize = 32;

/// Maximum length of a preference key.
const MAX_PREFERENCE_KEY_LEN: usize = 64;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's profile.
    ///
    /// # Returns
    /// - `Ok(User)`: The profile
    /// - `Err(AppError::NotFound)`: No such user
    pub async fn get_profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates a user's display name.
    ///
    /// # Arguments
    /// - `user_id`: User to update
    /// - `username`: New display name
    ///
    /// # Returns
    /// - `Ok(User)`: The updated profile
    /// - `Err(AppError::BadRequest)`: Empty or overlong name
    /// - `Err(AppError::NotFound)`: No such user
    pub async fn update_username(&self, user_id: i32, username: &str) -> Result<User, AppError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(AppError::BadRequest(
                "Username cannot be empty".to_string(),
            ));
        }
        if username.len() > MAX_USERNAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Username cannot be longer than {} characters",
                MAX_USERNAME_LEN
            )));
        }

        UserRepository::new(self.db)
            .update_username(user_id, username.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gets all of a user's preferences.
    pub async fn get_preferences(&self, user_id: i32) -> Result<Vec<Preference>, AppError> {
        UserPreferenceRepository::new(self.db)
            .get_all_by_user(user_id)
            .await
    }

    /// Stores one preference value, replacing any previous value for the key.
    ///
    /// # Arguments
    /// - `user_id`: Owning user
    /// - `key`: Preference key
    /// - `value`: Arbitrary JSON value supplied by the client
    ///
    /// # Returns
    /// - `Ok(Preference)`: The stored preference
    /// - `Err(AppError::BadRequest)`: Empty or overlong key
    pub async fn set_preference(
        &self,
        user_id: i32,
        key: &str,
        value: serde_json::Value,
    ) -> Result<Preference, AppError> {
        if key.is_empty() {
            return Err(AppError::BadRequest(
                "Preference key cannot be empty".to_string(),
            ));
        }
        if key.len() > MAX_PREFERENCE_KEY_LEN {
            return Err(AppError::BadRequest(format!(
                "Preference key cannot be longer than {} characters",
                MAX_PREFERENCE_KEY_LEN
            )));
        }

        UserPreferenceRepository::new(self.db)
            .upsert(user_id, key, &value)
            .await
    }
}
