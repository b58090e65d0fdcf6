use crate::{
    data::game_time::GameTimeAbsenceRepository, error::AppError,
    model::game_time::CreateAbsenceParams,
};
use chrono::NaiveDate;
use test_utils::builder::TestBuilder;
use test_utils::factory::{game_time::create_absence, user::create_user};

mod create;
mod delete_by_user;
mod get_overlapping;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
