//! User preference repository.
//!
//! Preferences are opaque JSON values keyed per user; one row per
//! `(user_id, key)`. Writes go through `upsert` which replaces the stored
//! value in place.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{error::AppError, model::user::Preference};

pub struct UserPreferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPreferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all preferences for a user, ordered by key.
    ///
    /// # Returns
    /// - `Ok(Vec<Preference>)` - All stored preferences (empty if none)
    /// - `Err(AppError)` - Database error or malformed stored JSON
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Preference>, AppError> {
        let entities = entity::prelude::UserPreference::find()
            .filter(entity::user_preference::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_preference::Column::Key)
            .all(self.db)
            .await?;

        entities.into_iter().map(Preference::from_entity).collect()
    }

    /// Inserts or replaces one preference value.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `key` - Preference key
    /// - `value` - JSON value to store
    ///
    /// # Returns
    /// - `Ok(Preference)` - The stored preference
    /// - `Err(AppError)` - Database error
    pub async fn upsert(
        &self,
        user_id: i32,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<Preference, AppError> {
        let serialized = value.to_string();

        let existing = entity::prelude::UserPreference::find()
            .filter(entity::user_preference::Column::UserId.eq(user_id))
            .filter(entity::user_preference::Column::Key.eq(key))
            .one(self.db)
            .await?;

        let entity = if let Some(existing) = existing {
            let mut active_model: entity::user_preference::ActiveModel = existing.into();
            active_model.value = ActiveValue::Set(serialized);
            active_model.updated_at = ActiveValue::Set(Utc::now());
            active_model.update(self.db).await?
        } else {
            entity::user_preference::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                key: ActiveValue::Set(key.to_string()),
                value: ActiveValue::Set(serialized),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?
        };

        Preference::from_entity(entity)
    }
}
