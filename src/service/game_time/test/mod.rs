use crate::{error::AppError, service::game_time::GameTimeService};
use chrono::{DateTime, Days, NaiveDate, Utc};
use test_utils::builder::TestBuilder;
use test_utils::factory::{
    event::EventFactory,
    event_signup::EventSignupFactory,
    game_time::{create_absence, create_override, create_template_slot},
    user::create_user,
};

mod replace_template;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    day.and_hms_opt(hour, minute, 0).unwrap().and_utc()
}
