//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading and updating user records.
//! Account creation happens through the authentication layer, outside this
//! service's scope, so the repository intentionally exposes no insert path.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{error::AppError, model::user::User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by primary key.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or malformed stored Discord ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Updates a user's display name.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `username` - New display name (validated by the service layer)
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update_username(
        &self,
        id: i32,
        username: String,
    ) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = existing.into();
        active_model.username = ActiveValue::Set(username);

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)?))
    }
}
