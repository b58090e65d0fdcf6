//! Event signup factory for creating test signup entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event signups with customizable fields.
pub struct EventSignupFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: i32,
    character_id: Option<i32>,
    status: String,
    note: Option<String>,
}

impl<'a> EventSignupFactory<'a> {
    /// Creates a new EventSignupFactory with default values.
    ///
    /// Defaults:
    /// - status: `"confirmed"`
    /// - character_id / note: `None`
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id,
            character_id: None,
            status: "confirmed".to_string(),
            note: None,
        }
    }

    pub fn character_id(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Builds and inserts the signup entity into the database.
    pub async fn build(self) -> Result<entity::event_signup::Model, DbErr> {
        entity::event_signup::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            character_id: ActiveValue::Set(self.character_id),
            status: ActiveValue::Set(self.status),
            note: ActiveValue::Set(self.note),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed signup for the given event and user.
pub async fn create_signup(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_signup::Model, DbErr> {
    EventSignupFactory::new(db, event_id, user_id).build().await
}
