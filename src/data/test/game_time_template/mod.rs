use crate::{
    data::game_time::GameTimeTemplateRepository, error::AppError, model::game_time::TemplateSlot,
};
use test_utils::builder::TestBuilder;
use test_utils::factory::{game_time::create_template_slot, user::create_user};

mod get_by_user;
mod replace_for_user;
