//! Event signup repository.
//!
//! Signups are unique per `(event, user)`; writes replace the existing row.
//! The preview query ranks signups in SQL (confirmed before tentative before
//! declined, ties broken by creation time) so pagination and limits stay
//! consistent between the preview and the full listing.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{CaseStatement, Expr, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::event::{Event, Signup, SignupCounts, SignupStatus, UpsertSignupParams},
};

pub struct EventSignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventSignupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranking expression: confirmed = 0, tentative = 1, declined = 2.
    fn rank_expr() -> SimpleExpr {
        CaseStatement::new()
            .case(
                Expr::col(entity::event_signup::Column::Status)
                    .eq(SignupStatus::Confirmed.as_str()),
                Expr::val(SignupStatus::Confirmed.rank()),
            )
            .case(
                Expr::col(entity::event_signup::Column::Status)
                    .eq(SignupStatus::Tentative.as_str()),
                Expr::val(SignupStatus::Tentative.rank()),
            )
            .finally(Expr::val(SignupStatus::Declined.rank()))
            .into()
    }

    /// Inserts or replaces the caller's signup on an event.
    ///
    /// # Arguments
    /// - `params`: Signup data; `(event_id, user_id)` selects the row
    ///
    /// # Returns
    /// - `Ok(Signup)`: The stored signup
    /// - `Err(AppError)`: Database error
    pub async fn upsert(&self, params: UpsertSignupParams) -> Result<Signup, AppError> {
        let existing = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(params.event_id))
            .filter(entity::event_signup::Column::UserId.eq(params.user_id))
            .one(self.db)
            .await?;

        let entity = if let Some(existing) = existing {
            let mut active_model: entity::event_signup::ActiveModel = existing.into();
            active_model.character_id = ActiveValue::Set(params.character_id);
            active_model.status = ActiveValue::Set(params.status.as_str().to_string());
            active_model.note = ActiveValue::Set(params.note);
            active_model.update(self.db).await?
        } else {
            entity::event_signup::ActiveModel {
                event_id: ActiveValue::Set(params.event_id),
                user_id: ActiveValue::Set(params.user_id),
                character_id: ActiveValue::Set(params.character_id),
                status: ActiveValue::Set(params.status.as_str().to_string()),
                note: ActiveValue::Set(params.note),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?
        };

        Signup::from_entity(entity)
    }

    /// Finds one user's signup on one event.
    pub async fn find_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<Signup>, AppError> {
        let entity = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .filter(entity::event_signup::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(Signup::from_entity).transpose()
    }

    /// Gets one user's signups across a set of events.
    ///
    /// Returns early with an empty vector when `event_ids` is empty.
    pub async fn get_by_user_for_events(
        &self,
        user_id: i32,
        event_ids: &[i32],
    ) -> Result<Vec<Signup>, AppError> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::UserId.eq(user_id))
            .filter(entity::event_signup::Column::EventId.is_in(event_ids.to_vec()))
            .all(self.db)
            .await?;

        entities.into_iter().map(Signup::from_entity).collect()
    }

    /// Deletes one user's signup on one event.
    ///
    /// # Returns
    /// - `Ok(true)`: A signup existed and was removed
    /// - `Ok(false)`: The user was not signed up
    pub async fn delete_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::EventSignup::delete_many()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .filter(entity::event_signup::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets an event's signups in rank order, optionally limited.
    ///
    /// # Arguments
    /// - `event_id`: Event to list
    /// - `limit`: Maximum rows to return; `None` returns all
    ///
    /// # Returns
    /// - `Ok(Vec<Signup>)`: Signups ordered confirmed → tentative → declined,
    ///   ties by creation time then id
    pub async fn get_ranked_by_event(
        &self,
        event_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Signup>, AppError> {
        let mut query = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .order_by(Self::rank_expr(), Order::Asc)
            .order_by_asc(entity::event_signup::Column::CreatedAt)
            .order_by_asc(entity::event_signup::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let entities = query.all(self.db).await?;

        entities.into_iter().map(Signup::from_entity).collect()
    }

    /// Counts an event's signups per status.
    pub async fn counts_by_event(&self, event_id: i32) -> Result<SignupCounts, AppError> {
        let mut counts = SignupCounts::default();

        for status in [
            SignupStatus::Confirmed,
            SignupStatus::Tentative,
            SignupStatus::Declined,
        ] {
            let count = entity::prelude::EventSignup::find()
                .filter(entity::event_signup::Column::EventId.eq(event_id))
                .filter(entity::event_signup::Column::Status.eq(status.as_str()))
                .count(self.db)
                .await?;

            match status {
                SignupStatus::Confirmed => counts.confirmed = count,
                SignupStatus::Tentative => counts.tentative = count,
                SignupStatus::Declined => counts.declined = count,
            }
        }

        Ok(counts)
    }

    /// Gets events the user is confirmed for that have not ended by `after`.
    ///
    /// Used to compute committed game-time slots.
    pub async fn get_confirmed_events_for_user(
        &self,
        user_id: i32,
        after: DateTime<Utc>,
    ) -> Result<Vec<Event>, AppError> {
        let rows = entity::prelude::EventSignup::find()
            .find_also_related(entity::prelude::Event)
            .filter(entity::event_signup::Column::UserId.eq(user_id))
            .filter(entity::event_signup::Column::Status.eq(SignupStatus::Confirmed.as_str()))
            .filter(entity::event::Column::EndTime.gt(after))
            .order_by_asc(entity::event::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, event)| event)
            .map(Event::from_entity)
            .collect())
    }
}
