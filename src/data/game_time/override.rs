use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::game_time::{Availability, Override},
};

pub struct GameTimeOverrideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTimeOverrideRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's overrides within the half-open date range `[start, end)`.
    pub async fn get_by_user_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Override>, AppError> {
        let entities = entity::prelude::GameTimeOverride::find()
            .filter(entity::game_time_override::Column::UserId.eq(user_id))
            .filter(entity::game_time_override::Column::Date.gte(start))
            .filter(entity::game_time_override::Column::Date.lt(end))
            .all(self.db)
            .await?;

        entities.into_iter().map(Override::from_entity).collect()
    }

    /// Inserts or replaces one override cell.
    pub async fn upsert(
        &self,
        user_id: i32,
        date: NaiveDate,
        hour: u8,
        availability: Availability,
    ) -> Result<Override, AppError> {
        let existing = entity::prelude::GameTimeOverride::find()
            .filter(entity::game_time_override::Column::UserId.eq(user_id))
            .filter(entity::game_time_override::Column::Date.eq(date))
            .filter(entity::game_time_override::Column::Hour.eq(hour as i32))
            .one(self.db)
            .await?;

        let entity = if let Some(existing) = existing {
            let mut active_model: entity::game_time_override::ActiveModel = existing.into();
            active_model.availability = ActiveValue::Set(availability.as_str().to_string());
            active_model.update(self.db).await?
        } else {
            entity::game_time_override::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                date: ActiveValue::Set(date),
                hour: ActiveValue::Set(hour as i32),
                availability: ActiveValue::Set(availability.as_str().to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?
        };

        Override::from_entity(entity)
    }

    /// Removes one override cell.
    ///
    /// # Returns
    /// - `Ok(true)`: An override existed and was removed
    /// - `Ok(false)`: No override stored for that cell
    pub async fn delete(
        &self,
        user_id: i32,
        date: NaiveDate,
        hour: u8,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::GameTimeOverride::delete_many()
            .filter(entity::game_time_override::Column::UserId.eq(user_id))
            .filter(entity::game_time_override::Column::Date.eq(date))
            .filter(entity::game_time_override::Column::Hour.eq(hour as i32))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
