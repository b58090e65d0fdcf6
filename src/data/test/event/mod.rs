use crate::{data::event::EventRepository, error::AppError};
use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;
use test_utils::factory::{event::EventFactory, user::create_user};

mod create;
mod get_overlapping_window;
mod get_paginated;
mod update;
