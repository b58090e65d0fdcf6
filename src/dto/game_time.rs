//! Game-time planner DTOs.
//!
//! Weekdays on the wire use the JavaScript `Date.getDay()` convention
//! (0 = Sunday .. 6 = Saturday); the service layer stores ISO weekdays
//! (0 = Monday .. 6 = Sunday) and translates at the controller boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::event::{SignupCountsDto, SignupDto};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub struct TemplateSlotDto {
    /// Weekday in client convention (0 = Sunday .. 6 = Saturday).
    pub weekday: u8,
    /// Hour of day, 0..=23.
    pub hour: u8,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TemplateDto {
    pub slots: Vec<TemplateSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SaveTemplateDto {
    pub slots: Vec<TemplateSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SaveTemplateResultDto {
    /// The slots actually stored, committed hours included.
    pub slots: Vec<TemplateSlotDto>,
    /// Slots the submitted template omitted but which were kept because they
    /// overlap an upcoming event the user is confirmed for.
    pub preserved: Vec<TemplateSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetOverrideDto {
    /// One of `available`, `unavailable`.
    pub availability: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AbsenceDto {
    pub id: i32,
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAbsenceDto {
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,
    /// Inclusive end of the absence.
    #[schema(value_type = String, format = Date)]
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CompositeSlotDto {
    pub hour: u8,
    /// One of `available`, `unavailable`, `committed`, `absent`.
    pub status: String,
    /// Layer that decided the status: `default`, `template`, `event`,
    /// `override`, `absence`.
    pub source: String,
    /// Event that committed this slot, when `status` is `committed`.
    pub event_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CompositeDayDto {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    /// Weekday in client convention (0 = Sunday .. 6 = Saturday).
    pub weekday: u8,
    /// 24 slots, one per hour.
    pub slots: Vec<CompositeSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WeekEventDto {
    pub id: i32,
    pub title: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub signup_counts: SignupCountsDto,
    /// Ranked preview of at most six signups.
    pub signup_preview: Vec<SignupDto>,
    pub my_status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CompositeWeekDto {
    /// Monday of the requested ISO week.
    #[schema(value_type = String, format = Date)]
    pub week_start: NaiveDate,
    /// Seven days starting at `week_start`.
    pub days: Vec<CompositeDayDto>,
    /// Events overlapping the week, ordered by start time.
    pub events: Vec<WeekEventDto>,
}
