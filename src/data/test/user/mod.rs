use crate::{data::user::UserRepository, error::AppError};
use test_utils::builder::TestBuilder;
use test_utils::factory::user::UserFactory;

mod find_by_id;
mod update_username;
