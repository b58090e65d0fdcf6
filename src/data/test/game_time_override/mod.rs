use crate::{
    data::game_time::GameTimeOverrideRepository,
    error::AppError,
    model::game_time::Availability,
};
use chrono::NaiveDate;
use test_utils::builder::TestBuilder;
use test_utils::factory::{game_time::create_override, user::create_user};

mod delete;
mod get_by_user_in_range;
mod upsert;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
