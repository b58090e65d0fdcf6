use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::event::Event};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event.
    ///
    /// # Arguments
    /// - `title`: Event title
    /// - `description`: Optional description
    /// - `start_time`: UTC start (already parsed and validated)
    /// - `end_time`: UTC end, exclusive
    /// - `created_by`: Creating user's ID
    ///
    /// # Returns
    /// - `Ok(Event)`: The created event
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        created_by: i32,
    ) -> Result<Event, AppError> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    /// Gets an event by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets paginated events that end at or after the cutoff, upcoming first.
    ///
    /// # Arguments
    /// - `cutoff`: Events ending before this instant are excluded
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((events, total))`: Vector of events and total matching count
    /// - `Err(AppError)`: Database error
    pub async fn get_paginated(
        &self,
        cutoff: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Event>, u64), AppError> {
        let paginator = entity::prelude::Event::find()
            .filter(entity::event::Column::EndTime.gte(cutoff))
            .order_by_asc(entity::event::Column::StartTime)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let events = entities.into_iter().map(Event::from_entity).collect();

        Ok((events, total))
    }

    /// Gets events overlapping the half-open UTC window `[start, end)`.
    pub async fn get_overlapping_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, AppError> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::StartTime.lt(end))
            .filter(entity::event::Column::EndTime.gt(start))
            .order_by_asc(entity::event::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Updates an event's title, description, and times.
    ///
    /// # Returns
    /// - `Ok(Event)`: The updated event
    /// - `Err(AppError::NotFound)`: No event with that ID
    pub async fn update(
        &self,
        id: i32,
        title: String,
        description: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Event, AppError> {
        let existing = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let mut active_model: entity::event::ActiveModel = existing.into();
        active_model.title = ActiveValue::Set(title);
        active_model.description = ActiveValue::Set(description);
        active_model.start_time = ActiveValue::Set(start_time);
        active_model.end_time = ActiveValue::Set(end_time);

        let updated = active_model.update(self.db).await?;

        Ok(Event::from_entity(updated))
    }

    /// Deletes an event by ID. Signups cascade.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Event::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
