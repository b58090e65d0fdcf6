use crate::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{CreateCharacterParams, UpdateCharacterParams},
};
use test_utils::builder::TestBuilder;
use test_utils::factory::{character::CharacterFactory, user::create_user};

mod create;
mod find_by_user_game_name;
mod get_all_by_user;
mod set_main;
mod update;
