use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::{error::AppError, model::game_time::TemplateSlot};

pub struct GameTimeTemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTimeTemplateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's template slots ordered by weekday then hour.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<TemplateSlot>, AppError> {
        let entities = entity::prelude::GameTimeTemplate::find()
            .filter(entity::game_time_template::Column::UserId.eq(user_id))
            .order_by_asc(entity::game_time_template::Column::Weekday)
            .order_by_asc(entity::game_time_template::Column::Hour)
            .all(self.db)
            .await?;

        entities.into_iter().map(TemplateSlot::from_entity).collect()
    }

    /// Replaces a user's template with the given slot set.
    ///
    /// Delete and re-insert run in one transaction so a failed write cannot
    /// leave the template half-replaced.
    pub async fn replace_for_user(
        &self,
        user_id: i32,
        slots: &[TemplateSlot],
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::GameTimeTemplate::delete_many()
            .filter(entity::game_time_template::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if !slots.is_empty() {
            let models = slots.iter().map(|slot| entity::game_time_template::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                weekday: ActiveValue::Set(slot.weekday as i32),
                hour: ActiveValue::Set(slot.hour as i32),
                ..Default::default()
            });

            entity::prelude::GameTimeTemplate::insert_many(models)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
