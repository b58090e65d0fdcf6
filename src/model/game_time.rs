//! Game-time planner domain models.
//!
//! All weekday values in this module use the ISO-style convention
//! 0 = Monday .. 6 = Sunday (chrono's `num_days_from_monday`). Translation to
//! the client's Sunday-first convention happens at the controller boundary.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    dto::game_time::AbsenceDto,
    error::{internal::InternalError, AppError},
};

/// One recurring weekly availability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateSlot {
    /// Weekday, 0 = Monday .. 6 = Sunday.
    pub weekday: u8,
    /// Hour of day, 0..=23.
    pub hour: u8,
}

impl TemplateSlot {
    /// Converts an entity row, validating the stored ranges.
    pub fn from_entity(entity: entity::game_time_template::Model) -> Result<Self, AppError> {
        if !(0..7).contains(&entity.weekday) || !(0..24).contains(&entity.hour) {
            return Err(InternalError::SlotOutOfRange {
                weekday: entity.weekday,
                hour: entity.hour,
            }
            .into());
        }

        Ok(Self {
            weekday: entity.weekday as u8,
            hour: entity.hour as u8,
        })
    }
}

/// Per-date availability override value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "unavailable" => Some(Self::Unavailable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

/// A per-date, per-hour availability override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub date: NaiveDate,
    pub hour: u8,
    pub availability: Availability,
}

impl Override {
    /// Converts an entity row, validating stored hour and availability.
    pub fn from_entity(entity: entity::game_time_override::Model) -> Result<Self, AppError> {
        if !(0..24).contains(&entity.hour) {
            return Err(InternalError::SlotOutOfRange {
                weekday: 0,
                hour: entity.hour,
            }
            .into());
        }

        let availability = Availability::parse(&entity.availability)
            .ok_or_else(|| InternalError::UnknownAvailability(entity.availability.clone()))?;

        Ok(Self {
            date: entity.date,
            hour: entity.hour as u8,
            availability,
        })
    }
}

/// An inclusive absence date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Absence {
    pub id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Absence {
    pub fn from_entity(entity: entity::game_time_absence::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AbsenceDto {
        AbsenceDto {
            id: self.id,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
            created_at: self.created_at,
        }
    }

    /// Whether the absence covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Parameters for creating an absence.
#[derive(Debug, Clone)]
pub struct CreateAbsenceParams {
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

/// Status of one composite-view cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Available,
    Unavailable,
    Committed,
    Absent,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Committed => "committed",
            Self::Absent => "absent",
        }
    }
}

/// Which layer decided a composite-view cell's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    Default,
    Template,
    Event,
    Override,
    Absence,
}

impl SlotSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Template => "template",
            Self::Event => "event",
            Self::Override => "override",
            Self::Absence => "absence",
        }
    }
}

/// One cell of the composite weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeSlot {
    pub hour: u8,
    pub status: SlotStatus,
    pub source: SlotSource,
    /// Event that committed this slot, when `status` is `Committed`.
    pub event_id: Option<i32>,
}

/// One day of the composite weekly grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeDay {
    pub date: NaiveDate,
    /// Weekday, 0 = Monday .. 6 = Sunday.
    pub weekday: u8,
    /// 24 slots, one per hour.
    pub slots: Vec<CompositeSlot>,
}

/// Result of replacing a user's weekly template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSaveResult {
    /// Slots actually stored.
    pub slots: Vec<TemplateSlot>,
    /// Committed slots the submission omitted but which were kept.
    pub preserved: Vec<TemplateSlot>,
}

/// An event overlapping the composite week, with its signup preview.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekEvent {
    pub event: crate::model::event::Event,
    pub counts: crate::model::event::SignupCounts,
    /// Ranked preview, at most six entries.
    pub preview: Vec<crate::model::event::SignupEntry>,
    pub my_status: Option<crate::model::event::SignupStatus>,
}

/// The fully composed weekly view.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeView {
    /// Monday of the requested ISO week.
    pub week_start: NaiveDate,
    /// Seven days starting at `week_start`.
    pub days: Vec<CompositeDay>,
    /// Events overlapping the week, ordered by start time.
    pub events: Vec<WeekEvent>,
}
