//! Factories for game-time planner rows.
//!
//! These tables are narrow, so plain creation helpers replace the builder
//! pattern used by the larger factories.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates one weekly template slot (ISO weekday, 0 = Monday).
pub async fn create_template_slot(
    db: &DatabaseConnection,
    user_id: i32,
    weekday: i32,
    hour: i32,
) -> Result<entity::game_time_template::Model, DbErr> {
    entity::game_time_template::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        weekday: ActiveValue::Set(weekday),
        hour: ActiveValue::Set(hour),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates one per-date override cell.
pub async fn create_override(
    db: &DatabaseConnection,
    user_id: i32,
    date: NaiveDate,
    hour: i32,
    availability: &str,
) -> Result<entity::game_time_override::Model, DbErr> {
    entity::game_time_override::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(date),
        hour: ActiveValue::Set(hour),
        availability: ActiveValue::Set(availability.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates one absence range (dates inclusive).
pub async fn create_absence(
    db: &DatabaseConnection,
    user_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<entity::game_time_absence::Model, DbErr> {
    entity::game_time_absence::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        reason: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
