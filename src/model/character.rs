//! Character domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::character::CharacterDto;

/// Roles a character can fill in a group.
pub const CHARACTER_ROLES: [&str; 3] = ["tank", "healer", "dps"];

/// A game character owned by a user.
///
/// Each user may own several characters per game; at most one of them is the
/// "main" for that game.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Unique identifier for the character.
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    /// Game slug the character belongs to.
    pub game: String,
    /// Character name, unique per (user, game).
    pub name: String,
    /// Character class, when known.
    pub class: Option<String>,
    /// Group role (`tank`, `healer`, `dps`), when set.
    pub role: Option<String>,
    /// Whether this is the user's main character for the game.
    pub is_main: bool,
    /// Timestamp when the character was created.
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            game: entity.game,
            name: entity.name,
            class: entity.class,
            role: entity.role,
            is_main: entity.is_main,
            created_at: entity.created_at,
        }
    }

    /// Converts the character domain model to a DTO for API responses.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            game: self.game,
            name: self.name,
            class: self.class,
            role: self.role,
            is_main: self.is_main,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new character.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    /// Owning user.
    pub user_id: i32,
    /// Game slug.
    pub game: String,
    /// Character name.
    pub name: String,
    /// Character class, when known.
    pub class: Option<String>,
    /// Group role, when set.
    pub role: Option<String>,
    /// Whether the character starts as the game's main.
    pub is_main: bool,
}

/// Parameters for updating an existing character.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateCharacterParams {
    pub name: Option<String>,
    pub class: Option<String>,
    pub role: Option<String>,
}
