use sea_orm::DatabaseConnection;

use crate::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, CreateCharacterParams, UpdateCharacterParams, CHARACTER_ROLES},
    service::game_data::GameDataClient,
};

/// Maximum length of a character name.
const MAX_NAME_LEN: usize = 48;

/// Maximum length of a game slug.
const MAX_GAME_LEN: usize = 32;

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    game_data: Option<&'a GameDataClient>,
}

impl<'a> CharacterService<'a> {
    /// Creates a new character service.
    ///
    /// # Arguments
    /// - `db`: Database connection
    /// - `game_data`: Optional game-data API client used to fill in missing
    ///   character metadata on creation
    pub fn new(db: &'a DatabaseConnection, game_data: Option<&'a GameDataClient>) -> Self {
        Self { db, game_data }
    }

    /// Lists a user's characters, mains first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Character>, AppError> {
        CharacterRepository::new(self.db)
            .get_all_by_user(user_id)
            .await
    }

    /// Creates a character for a user.
    ///
    /// The first character created for a game automatically becomes that
    /// game's main. When a game-data client is configured and no class was
    /// supplied, the class is looked up from the external API; lookup
    /// failures are logged and ignored.
    ///
    /// # Arguments
    /// - `user_id`: Owning user
    /// - `game`: Game slug
    /// - `name`: Character name
    /// - `class`: Optional class
    /// - `role`: Optional group role
    ///
    /// # Returns
    /// - `Ok(Character)`: The created character
    /// - `Err(AppError::BadRequest)`: Invalid name, game slug, or role
    /// - `Err(AppError::Conflict)`: Duplicate `(game, name)` for this user
    pub async fn create(
        &self,
        user_id: i32,
        game: String,
        name: String,
        mut class: Option<String>,
        role: Option<String>,
    ) -> Result<Character, AppError> {
        let name = name.trim().to_string();
        Self::validate_name(&name)?;
        Self::validate_game(&game)?;
        Self::validate_role(role.as_deref())?;

        let repo = CharacterRepository::new(self.db);

        if repo
            .find_by_user_game_name(user_id, &game, &name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "You already have a character named '{}' in {}",
                name, game
            )));
        }

        if class.is_none() {
            if let Some(client) = self.game_data {
                match client.get_character_profile(&game, &name).await {
                    Ok(profile) => class = profile.class,
                    Err(e) => {
                        tracing::warn!(game, name, error = %e, "Game-data lookup failed");
                    }
                }
            }
        }

        // First character of a game becomes the main.
        let is_main = repo.count_by_user_game(user_id, &game).await? == 0;

        repo.create(CreateCharacterParams {
            user_id,
            game,
            name,
            class,
            role,
            is_main,
        })
        .await
    }

    /// Updates a character's name, class, or role.
    ///
    /// # Returns
    /// - `Ok(Character)`: The updated character
    /// - `Err(AppError::NotFound)`: Character missing or owned by another user
    /// - `Err(AppError::BadRequest)`: Invalid field value
    /// - `Err(AppError::Conflict)`: Rename collides with an existing character
    pub async fn update(
        &self,
        user_id: i32,
        character_id: i32,
        params: UpdateCharacterParams,
    ) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);
        let character = self.get_owned(&repo, user_id, character_id).await?;

        let params = UpdateCharacterParams {
            name: params.name.map(|n| n.trim().to_string()),
            class: params.class,
            role: params.role,
        };

        if let Some(name) = &params.name {
            Self::validate_name(name)?;

            if *name != character.name
                && repo
                    .find_by_user_game_name(user_id, &character.game, name)
                    .await?
                    .is_some()
            {
                return Err(AppError::Conflict(format!(
                    "You already have a character named '{}' in {}",
                    name, character.game
                )));
            }
        }
        Self::validate_role(params.role.as_deref())?;

        repo.update(character_id, params).await
    }

    /// Deletes a character.
    ///
    /// Deleting a main leaves the game with no main until another character
    /// is promoted.
    ///
    /// # Returns
    /// - `Ok(())`: Character deleted
    /// - `Err(AppError::NotFound)`: Character missing or owned by another user
    pub async fn delete(&self, user_id: i32, character_id: i32) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);
        self.get_owned(&repo, user_id, character_id).await?;

        repo.delete(character_id).await
    }

    /// Promotes a character to main for its game.
    ///
    /// The demote-then-promote pair runs in a single transaction inside the
    /// repository.
    ///
    /// # Returns
    /// - `Ok(Character)`: The promoted character
    /// - `Err(AppError::NotFound)`: Character missing or owned by another user
    pub async fn set_main(&self, user_id: i32, character_id: i32) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);
        let character = self.get_owned(&repo, user_id, character_id).await?;

        if character.is_main {
            return Ok(character);
        }

        repo.set_main(user_id, &character.game, character_id).await?;

        repo.get_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found after promotion".to_string()))
    }

    /// Loads a character and checks ownership.
    ///
    /// Returns 404 rather than 403 for other users' characters so the
    /// endpoint does not leak which IDs exist.
    async fn get_owned(
        &self,
        repo: &CharacterRepository<'a>,
        user_id: i32,
        character_id: i32,
    ) -> Result<Character, AppError> {
        let character = repo
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        if character.user_id != user_id {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        Ok(character)
    }

    fn validate_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Character name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Character name cannot be longer than {} characters",
                MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    fn validate_game(game: &str) -> Result<(), AppError> {
        if game.is_empty() || game.len() > MAX_GAME_LEN {
            return Err(AppError::BadRequest(
                "Game slug must be between 1 and 32 characters".to_string(),
            ));
        }
        if !game
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(AppError::BadRequest(
                "Game slug may only contain lowercase letters, digits, and dashes".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_role(role: Option<&str>) -> Result<(), AppError> {
        if let Some(role) = role {
            if !CHARACTER_ROLES.contains(&role) {
                return Err(AppError::BadRequest(format!(
                    "Role must be one of: {}",
                    CHARACTER_ROLES.join(", ")
                )));
            }
        }
        Ok(())
    }
}
