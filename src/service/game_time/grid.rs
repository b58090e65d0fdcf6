//! Pure grid arithmetic for the game-time planner.
//!
//! Two weekday conventions meet here: storage and domain use ISO-style
//! 0 = Monday .. 6 = Sunday, while the HTTP API keeps the original browser
//! client's `Date.getDay()` convention 0 = Sunday .. 6 = Saturday. The
//! translation functions below are the only place the two are converted.
//!
//! `compose` builds the weekly composite grid by layering template slots,
//! event commitments, per-date overrides, and absences over a default-
//! unavailable 7x24 grid, in that order, so the last layer written wins:
//! absence > override > committed > template > default.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Timelike, Utc};

use crate::model::game_time::{
    Absence, Availability, CompositeDay, CompositeSlot, Override, SlotSource, SlotStatus,
    TemplateSlot,
};

/// Cells in a full week; also the cap for a single event's hour walk, since
/// a longer event only revisits weekly cells it already covered.
const CELLS_PER_WEEK: usize = 7 * 24;

/// A grid cell committed by a confirmed event signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedCell {
    pub date: NaiveDate,
    pub hour: u8,
    pub event_id: i32,
}

/// Converts a client weekday (0 = Sunday) to an ISO weekday (0 = Monday).
///
/// # Returns
/// - `Some(weekday)` - Converted value in 0..=6
/// - `None` - Input outside 0..=6
pub fn client_to_iso_weekday(weekday: u8) -> Option<u8> {
    if weekday < 7 {
        Some((weekday + 6) % 7)
    } else {
        None
    }
}

/// Converts an ISO weekday (0 = Monday) to a client weekday (0 = Sunday).
pub fn iso_to_client_weekday(weekday: u8) -> u8 {
    (weekday + 1) % 7
}

/// ISO weekday (0 = Monday) of a calendar date.
pub fn iso_weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// The Monday of the ISO week containing `date`.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

/// Rounds a UTC instant down to the start of its hour.
pub fn truncate_to_hour(time: DateTime<Utc>) -> DateTime<Utc> {
    time - Duration::seconds(time.timestamp().rem_euclid(3600))
}

/// Walks an event's UTC range hour by hour and returns the covered cells.
///
/// The start is truncated to its hour (an event starting 19:30 occupies the
/// 19:00 cell); the end is exclusive (an event ending 22:00 does not occupy
/// the 22:00 cell). Returns at most one week of cells.
///
/// # Arguments
/// - `start`: Event start (UTC), clamped by the caller when a window applies
/// - `end`: Event end (UTC, exclusive)
pub fn event_hour_cells(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<(NaiveDate, u8)> {
    let mut cells = Vec::new();

    let mut cursor = truncate_to_hour(start);
    while cursor < end && cells.len() < CELLS_PER_WEEK {
        cells.push((cursor.date_naive(), cursor.hour() as u8));
        cursor += Duration::hours(1);
    }

    cells
}

/// Builds the composite weekly grid.
///
/// # Arguments
/// - `week_start`: Monday the grid starts on
/// - `template`: Recurring availability slots (ISO weekdays)
/// - `committed`: Cells covered by the user's confirmed event signups
/// - `overrides`: Per-date hour overrides within the week
/// - `absences`: Absence ranges overlapping the week
///
/// # Returns
/// Seven `CompositeDay`s in week order, each holding 24 slots.
pub fn compose(
    week_start: NaiveDate,
    template: &[TemplateSlot],
    committed: &[CommittedCell],
    overrides: &[Override],
    absences: &[Absence],
) -> Vec<CompositeDay> {
    let mut days: Vec<CompositeDay> = (0..7u64)
        .map(|offset| {
            let date = week_start + Days::new(offset);
            CompositeDay {
                date,
                weekday: offset as u8,
                slots: (0..24u8)
                    .map(|hour| CompositeSlot {
                        hour,
                        status: SlotStatus::Unavailable,
                        source: SlotSource::Default,
                        event_id: None,
                    })
                    .collect(),
            }
        })
        .collect();

    for slot in template {
        if slot.weekday < 7 && slot.hour < 24 {
            let cell = &mut days[slot.weekday as usize].slots[slot.hour as usize];
            cell.status = SlotStatus::Available;
            cell.source = SlotSource::Template;
        }
    }

    for committed_cell in committed {
        if let Some(day_index) = day_index_of(week_start, committed_cell.date) {
            if committed_cell.hour < 24 {
                let cell = &mut days[day_index].slots[committed_cell.hour as usize];
                cell.status = SlotStatus::Committed;
                cell.source = SlotSource::Event;
                cell.event_id = Some(committed_cell.event_id);
            }
        }
    }

    for override_cell in overrides {
        if let Some(day_index) = day_index_of(week_start, override_cell.date) {
            if override_cell.hour < 24 {
                let cell = &mut days[day_index].slots[override_cell.hour as usize];
                cell.status = match override_cell.availability {
                    Availability::Available => SlotStatus::Available,
                    Availability::Unavailable => SlotStatus::Unavailable,
                };
                cell.source = SlotSource::Override;
                cell.event_id = None;
            }
        }
    }

    for absence in absences {
        for day in days.iter_mut() {
            if absence.covers(day.date) {
                for cell in day.slots.iter_mut() {
                    cell.status = SlotStatus::Absent;
                    cell.source = SlotSource::Absence;
                    cell.event_id = None;
                }
            }
        }
    }

    days
}

/// Index of `date` within the week starting at `week_start`, if inside it.
fn day_index_of(week_start: NaiveDate, date: NaiveDate) -> Option<usize> {
    let offset = (date - week_start).num_days();
    if (0..7).contains(&offset) {
        Some(offset as usize)
    } else {
        None
    }
}
