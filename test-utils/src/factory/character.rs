//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    game: String,
    name: String,
    class: Option<String>,
    role: Option<String>,
    is_main: bool,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - game: `"wow-classic"`
    /// - name: `"Character {id}"` where id is auto-incremented
    /// - class / role: `None`
    /// - is_main: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            game: "wow-classic".to_string(),
            name: format!("Character {}", id),
            class: None,
            role: None,
            is_main: false,
        }
    }

    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = game.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn is_main(mut self, is_main: bool) -> Self {
        self.is_main = is_main;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            game: ActiveValue::Set(self.game),
            name: ActiveValue::Set(self.name),
            class: ActiveValue::Set(self.class),
            role: ActiveValue::Set(self.role),
            is_main: ActiveValue::Set(self.is_main),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values for the given user.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, user_id).build().await
}
