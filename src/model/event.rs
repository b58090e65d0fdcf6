//! Event and signup domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    dto::event::{EventListItemDto, SignupCountsDto, SignupDto},
    error::{internal::InternalError, AppError},
    model::character::Character,
};

/// A scheduled guild event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: i32,
    /// Event title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// UTC start of the event.
    pub start_time: DateTime<Utc>,
    /// UTC end of the event (exclusive).
    pub end_time: DateTime<Utc>,
    /// User that created the event.
    pub created_by: i32,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new event.
///
/// Times arrive as raw client strings; the service parses and validates them.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: Option<String>,
    /// "YYYY-MM-DD HH:MM" in UTC, or "now".
    pub start_time: String,
    /// "YYYY-MM-DD HH:MM" in UTC.
    pub end_time: String,
    pub created_by: i32,
}

/// Parameters for updating an event.
#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub title: String,
    pub description: Option<String>,
    /// "YYYY-MM-DD HH:MM" in UTC, or "now".
    pub start_time: String,
    /// "YYYY-MM-DD HH:MM" in UTC.
    pub end_time: String,
}

/// Signup status, ranked for preview ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStatus {
    Confirmed,
    Tentative,
    Declined,
}

impl SignupStatus {
    /// Parses a client-supplied or stored status string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(Self::Confirmed),
            "tentative" => Some(Self::Tentative),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }

    /// The canonical string stored in the database and sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Tentative => "tentative",
            Self::Declined => "declined",
        }
    }

    /// Preview rank; lower sorts first.
    pub fn rank(&self) -> i32 {
        match self {
            Self::Confirmed => 0,
            Self::Tentative => 1,
            Self::Declined => 2,
        }
    }
}

/// A user's signup on an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    /// Unique identifier for the signup.
    pub id: i32,
    /// Event signed up for.
    pub event_id: i32,
    /// User that signed up.
    pub user_id: i32,
    /// Character the user intends to bring, when chosen.
    pub character_id: Option<i32>,
    /// Signup status.
    pub status: SignupStatus,
    /// Free-form note to the organizer.
    pub note: Option<String>,
    /// Timestamp when the signup was first created.
    pub created_at: DateTime<Utc>,
}

impl Signup {
    /// Converts an entity model to a signup domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Signup)` - The converted signup
    /// - `Err(AppError::InternalErr(UnknownSignupStatus))` - The stored status
    ///   string matches no known variant
    pub fn from_entity(entity: entity::event_signup::Model) -> Result<Self, AppError> {
        let status = SignupStatus::parse(&entity.status)
            .ok_or_else(|| InternalError::UnknownSignupStatus(entity.status.clone()))?;

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            character_id: entity.character_id,
            status,
            note: entity.note,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating or replacing a signup.
#[derive(Debug, Clone)]
pub struct UpsertSignupParams {
    pub event_id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub status: SignupStatus,
    pub note: Option<String>,
}

/// Signup counts per status for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignupCounts {
    pub confirmed: u64,
    pub tentative: u64,
    pub declined: u64,
}

impl SignupCounts {
    pub fn into_dto(self) -> SignupCountsDto {
        SignupCountsDto {
            confirmed: self.confirmed,
            tentative: self.tentative,
            declined: self.declined,
        }
    }
}

/// A signup enriched with the signing user's name and chosen character.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupEntry {
    pub signup: Signup,
    pub username: String,
    pub character: Option<Character>,
}

impl SignupEntry {
    pub fn into_dto(self) -> SignupDto {
        let (character_name, character_class, character_role) = match self.character {
            Some(c) => (Some(c.name), c.class, c.role),
            None => (None, None, None),
        };

        SignupDto {
            user_id: self.signup.user_id,
            username: self.username,
            character_name,
            character_class,
            character_role,
            status: self.signup.status.as_str().to_string(),
            note: self.signup.note,
            created_at: self.signup.created_at,
        }
    }
}

/// An event list row enriched with creator name and signup counts.
#[derive(Debug, Clone, PartialEq)]
pub struct EventListItem {
    pub event: Event,
    pub creator_name: String,
    pub counts: SignupCounts,
}

impl EventListItem {
    pub fn into_dto(self) -> EventListItemDto {
        EventListItemDto {
            id: self.event.id,
            title: self.event.title,
            start_time: self.event.start_time,
            end_time: self.event.end_time,
            creator_name: self.creator_name,
            signup_counts: self.counts.into_dto(),
        }
    }
}

/// An event with everything the detail endpoint renders.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub creator_name: String,
    pub counts: SignupCounts,
    /// Ranked preview, at most six entries.
    pub preview: Vec<SignupEntry>,
    /// The viewer's own signup status, when signed up.
    pub my_status: Option<SignupStatus>,
}

impl EventDetail {
    pub fn into_dto(self) -> crate::dto::event::EventDto {
        crate::dto::event::EventDto {
            id: self.event.id,
            title: self.event.title,
            description: self.event.description,
            start_time: self.event.start_time,
            end_time: self.event.end_time,
            created_by: self.event.created_by,
            creator_name: self.creator_name,
            created_at: self.event.created_at,
            signup_counts: self.counts.into_dto(),
            signup_preview: self.preview.into_iter().map(SignupEntry::into_dto).collect(),
            my_status: self.my_status.map(|s| s.as_str().to_string()),
        }
    }
}

/// Paginated collection of event list rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedEvents {
    pub events: Vec<EventListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedEvents {
    pub fn into_dto(self) -> crate::dto::event::PaginatedEventsDto {
        crate::dto::event::PaginatedEventsDto {
            events: self
                .events
                .into_iter()
                .map(EventListItem::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
