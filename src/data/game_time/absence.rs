use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::game_time::{Absence, CreateAbsenceParams},
};

pub struct GameTimeAbsenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTimeAbsenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new absence range.
    pub async fn create(&self, params: CreateAbsenceParams) -> Result<Absence, AppError> {
        let entity = entity::game_time_absence::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            reason: ActiveValue::Set(params.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Absence::from_entity(entity))
    }

    /// Gets all of a user's absences ordered by start date.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Absence>, AppError> {
        let entities = entity::prelude::GameTimeAbsence::find()
            .filter(entity::game_time_absence::Column::UserId.eq(user_id))
            .order_by_asc(entity::game_time_absence::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Absence::from_entity).collect())
    }

    /// Gets a user's absences overlapping the half-open date range `[start, end)`.
    ///
    /// Absence ranges are inclusive on both ends, so a range overlaps the
    /// window when `start_date < end` and `end_date >= start`.
    pub async fn get_overlapping(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Absence>, AppError> {
        let entities = entity::prelude::GameTimeAbsence::find()
            .filter(entity::game_time_absence::Column::UserId.eq(user_id))
            .filter(entity::game_time_absence::Column::StartDate.lt(end))
            .filter(entity::game_time_absence::Column::EndDate.gte(start))
            .order_by_asc(entity::game_time_absence::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Absence::from_entity).collect())
    }

    /// Deletes one of a user's absences.
    ///
    /// Scoped to the owner so users cannot remove other users' rows.
    ///
    /// # Returns
    /// - `Ok(true)`: The absence existed and was removed
    /// - `Ok(false)`: No matching absence for this user
    pub async fn delete_by_user(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::GameTimeAbsence::delete_many()
            .filter(entity::game_time_absence::Column::Id.eq(id))
            .filter(entity::game_time_absence::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
