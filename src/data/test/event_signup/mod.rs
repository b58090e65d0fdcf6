use crate::{
    data::event_signup::EventSignupRepository,
    error::AppError,
    model::event::{SignupStatus, UpsertSignupParams},
};
use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;
use test_utils::factory::{
    event::EventFactory,
    event_signup::EventSignupFactory,
    user::{create_user, create_user_with_name},
};

mod counts_by_event;
mod delete_by_event_and_user;
mod get_confirmed_events_for_user;
mod get_ranked_by_event;
mod upsert;

fn upsert_params(event_id: i32, user_id: i32, status: SignupStatus) -> UpsertSignupParams {
    UpsertSignupParams {
        event_id,
        user_id,
        character_id: None,
        status,
        note: None,
    }
}
