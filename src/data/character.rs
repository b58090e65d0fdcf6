use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::AppError,
    model::character::{Character, CreateCharacterParams, UpdateCharacterParams},
};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character.
    ///
    /// # Arguments
    /// - `params`: Character creation data (validated by the service layer)
    ///
    /// # Returns
    /// - `Ok(Character)`: The created character
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        let entity = entity::character::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            game: ActiveValue::Set(params.game),
            name: ActiveValue::Set(params.name),
            class: ActiveValue::Set(params.class),
            role: ActiveValue::Set(params.role),
            is_main: ActiveValue::Set(params.is_main),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Gets a character by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, AppError> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets all characters for a user, mains first, then by game and name.
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Character>, AppError> {
        let entities = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .order_by_desc(entity::character::Column::IsMain)
            .order_by_asc(entity::character::Column::Game)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a character by its unique `(user, game, name)` triple.
    ///
    /// Used for duplicate detection before insert.
    pub async fn find_by_user_game_name(
        &self,
        user_id: i32,
        game: &str,
        name: &str,
    ) -> Result<Option<Character>, AppError> {
        let entity = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .filter(entity::character::Column::Game.eq(game))
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Counts a user's characters in one game.
    pub async fn count_by_user_game(&self, user_id: i32, game: &str) -> Result<u64, AppError> {
        let count = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .filter(entity::character::Column::Game.eq(game))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Updates a character's name, class, or role.
    ///
    /// `None` fields are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Character)`: The updated character
    /// - `Err(AppError::NotFound)`: No character with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCharacterParams,
    ) -> Result<Character, AppError> {
        let existing = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        let mut active_model: entity::character::ActiveModel = existing.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(class) = params.class {
            active_model.class = ActiveValue::Set(Some(class));
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(Some(role));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Character::from_entity(updated))
    }

    /// Deletes a character by ID.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Makes a character the main for its game.
    ///
    /// Demotes the current main of `(user_id, game)` and promotes
    /// `character_id` inside a single transaction, so the at-most-one-main
    /// invariant holds even if the second statement fails.
    ///
    /// # Arguments
    /// - `user_id`: Owning user
    /// - `game`: Game slug the swap applies to
    /// - `character_id`: Character to promote
    pub async fn set_main(
        &self,
        user_id: i32,
        game: &str,
        character_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Character::update_many()
            .filter(entity::character::Column::UserId.eq(user_id))
            .filter(entity::character::Column::Game.eq(game))
            .filter(entity::character::Column::IsMain.eq(true))
            .col_expr(
                entity::character::Column::IsMain,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(&txn)
            .await?;

        entity::prelude::Character::update_many()
            .filter(entity::character::Column::Id.eq(character_id))
            .col_expr(
                entity::character::Column::IsMain,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}
