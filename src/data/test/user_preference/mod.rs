use crate::{data::user_preference::UserPreferenceRepository, error::AppError};
use test_utils::builder::TestBuilder;
use test_utils::factory::user::create_user;

mod get_all_by_user;
mod upsert;
