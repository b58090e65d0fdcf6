use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    pub description: Option<String>,
    /// Format: "YYYY-MM-DD HH:MM" in UTC, or "now".
    pub start_time: String,
    /// Format: "YYYY-MM-DD HH:MM" in UTC.
    pub end_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEventDto {
    pub title: String,
    pub description: Option<String>,
    /// Format: "YYYY-MM-DD HH:MM" in UTC, or "now".
    pub start_time: String,
    /// Format: "YYYY-MM-DD HH:MM" in UTC.
    pub end_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub created_by: i32,
    pub creator_name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub signup_counts: SignupCountsDto,
    /// Ranked preview of at most six signups.
    pub signup_preview: Vec<SignupDto>,
    /// The caller's own signup status, when signed up.
    pub my_status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventListItemDto {
    pub id: i32,
    pub title: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub creator_name: String,
    pub signup_counts: SignupCountsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SignupCountsDto {
    pub confirmed: u64,
    pub tentative: u64,
    pub declined: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SignupDto {
    pub user_id: i32,
    pub username: String,
    pub character_name: Option<String>,
    pub character_class: Option<String>,
    pub character_role: Option<String>,
    /// One of `confirmed`, `tentative`, `declined`.
    pub status: String,
    pub note: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSignupDto {
    /// One of `confirmed`, `tentative`, `declined`.
    pub status: String,
    /// Character to bring; must belong to the caller.
    pub character_id: Option<i32>,
    pub note: Option<String>,
}
