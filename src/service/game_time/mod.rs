//! Game-time planner service.
//!
//! Owns the recurring weekly availability template, per-date overrides,
//! absence ranges, and the composite weekly view that merges all of them
//! with the user's confirmed event signups.

pub mod grid;

#[cfg(test)]
mod test;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;

use crate::{
    data::{
        event::EventRepository,
        event_signup::EventSignupRepository,
        game_time::{
            GameTimeAbsenceRepository, GameTimeOverrideRepository, GameTimeTemplateRepository,
        },
    },
    error::AppError,
    model::{
        event::SignupStatus,
        game_time::{
            Absence, Availability, CompositeView, CreateAbsenceParams, Override,
            TemplateSaveResult, TemplateSlot, WeekEvent,
        },
    },
    service::event::EventService,
};

use grid::CommittedCell;

/// Maximum length of an absence reason.
const MAX_REASON_LEN: usize = 128;

pub struct GameTimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's weekly template slots (ISO weekdays).
    pub async fn get_template(&self, user_id: i32) -> Result<Vec<TemplateSlot>, AppError> {
        GameTimeTemplateRepository::new(self.db)
            .get_by_user(user_id)
            .await
    }

    /// Replaces a user's weekly template.
    ///
    /// Template hours that overlap an upcoming event the user is confirmed
    /// for are committed: they are kept in the stored template even when the
    /// submitted set omits them, so signing up for a raid and then trimming
    /// the template cannot silently free the raid's hours.
    ///
    /// # Arguments
    /// - `user_id`: Owning user
    /// - `slots`: Submitted slot set (ISO weekdays)
    ///
    /// # Returns
    /// - `Ok(TemplateSaveResult)`: Stored slots plus the preserved subset
    /// - `Err(AppError::BadRequest)`: A slot outside the 7x24 grid
    pub async fn replace_template(
        &self,
        user_id: i32,
        slots: Vec<TemplateSlot>,
    ) -> Result<TemplateSaveResult, AppError> {
        for slot in &slots {
            if slot.weekday >= 7 || slot.hour >= 24 {
                return Err(AppError::BadRequest(format!(
                    "Slot (weekday {}, hour {}) is outside the weekly grid",
                    slot.weekday, slot.hour
                )));
            }
        }

        let mut stored: BTreeSet<TemplateSlot> = slots.into_iter().collect();

        let committed = self.committed_template_slots(user_id).await?;
        let preserved: Vec<TemplateSlot> = committed
            .into_iter()
            .filter(|slot| !stored.contains(slot))
            .collect();
        stored.extend(preserved.iter().copied());

        let stored: Vec<TemplateSlot> = stored.into_iter().collect();

        GameTimeTemplateRepository::new(self.db)
            .replace_for_user(user_id, &stored)
            .await?;

        Ok(TemplateSaveResult {
            slots: stored,
            preserved,
        })
    }

    /// Inserts or replaces one per-date override.
    ///
    /// # Returns
    /// - `Ok(Override)`: The stored override
    /// - `Err(AppError::BadRequest)`: Invalid hour or availability value
    pub async fn set_override(
        &self,
        user_id: i32,
        date: NaiveDate,
        hour: u8,
        availability_raw: &str,
    ) -> Result<Override, AppError> {
        if hour >= 24 {
            return Err(AppError::BadRequest(format!(
                "Hour must be between 0 and 23, got {}",
                hour
            )));
        }

        let availability = Availability::parse(availability_raw).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown availability '{}'. Expected available or unavailable",
                availability_raw
            ))
        })?;

        GameTimeOverrideRepository::new(self.db)
            .upsert(user_id, date, hour, availability)
            .await
    }

    /// Removes one per-date override.
    ///
    /// # Returns
    /// - `Ok(())`: Override removed
    /// - `Err(AppError::NotFound)`: No override stored for that slot
    pub async fn clear_override(
        &self,
        user_id: i32,
        date: NaiveDate,
        hour: u8,
    ) -> Result<(), AppError> {
        let removed = GameTimeOverrideRepository::new(self.db)
            .delete(user_id, date, hour)
            .await?;

        if !removed {
            return Err(AppError::NotFound(
                "No override stored for that slot".to_string(),
            ));
        }

        Ok(())
    }

    /// Creates an absence range.
    ///
    /// # Returns
    /// - `Ok(Absence)`: The created absence
    /// - `Err(AppError::BadRequest)`: End before start or overlong reason
    pub async fn create_absence(&self, params: CreateAbsenceParams) -> Result<Absence, AppError> {
        if params.end_date < params.start_date {
            return Err(AppError::BadRequest(
                "Absence end date cannot be before its start date".to_string(),
            ));
        }

        if let Some(reason) = &params.reason {
            if reason.len() > MAX_REASON_LEN {
                return Err(AppError::BadRequest(format!(
                    "Reason cannot be longer than {} characters",
                    MAX_REASON_LEN
                )));
            }
        }

        GameTimeAbsenceRepository::new(self.db).create(params).await
    }

    /// Lists a user's absences ordered by start date.
    pub async fn list_absences(&self, user_id: i32) -> Result<Vec<Absence>, AppError> {
        GameTimeAbsenceRepository::new(self.db)
            .get_by_user(user_id)
            .await
    }

    /// Deletes one of the user's absences.
    ///
    /// # Returns
    /// - `Ok(())`: Absence removed
    /// - `Err(AppError::NotFound)`: No such absence for this user
    pub async fn delete_absence(&self, user_id: i32, absence_id: i32) -> Result<(), AppError> {
        let removed = GameTimeAbsenceRepository::new(self.db)
            .delete_by_user(user_id, absence_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Absence not found".to_string()));
        }

        Ok(())
    }

    /// Builds the composite weekly view.
    ///
    /// The requested date is normalized to the Monday of its ISO week. Per
    /// grid cell, layers apply in priority order absence > override >
    /// committed > template > default-unavailable. Events overlapping the
    /// week are returned alongside the grid with their ranked signup preview.
    ///
    /// # Arguments
    /// - `user_id`: Viewing user
    /// - `start`: Any date inside the requested week; defaults to today
    pub async fn get_composite_view(
        &self,
        user_id: i32,
        start: Option<NaiveDate>,
    ) -> Result<CompositeView, AppError> {
        let week_start = grid::monday_of_week(start.unwrap_or_else(|| Utc::now().date_naive()));
        let week_end = week_start + chrono::Days::new(7);

        let window_start = week_start.and_time(NaiveTime::MIN).and_utc();
        let window_end = window_start + Duration::days(7);

        let template = self.get_template(user_id).await?;

        let events = EventRepository::new(self.db)
            .get_overlapping_window(window_start, window_end)
            .await?;

        let committed = self
            .committed_cells_in_window(user_id, &events, window_start, window_end)
            .await?;

        let overrides = GameTimeOverrideRepository::new(self.db)
            .get_by_user_in_range(user_id, week_start, week_end)
            .await?;

        let absences = GameTimeAbsenceRepository::new(self.db)
            .get_overlapping(user_id, week_start, week_end)
            .await?;

        let days = grid::compose(week_start, &template, &committed, &overrides, &absences);

        let event_service = EventService::new(self.db);
        let mut week_events = Vec::new();

        for event in events {
            let (counts, preview, my_status) =
                event_service.signup_summary(event.id, user_id).await?;

            week_events.push(WeekEvent {
                event,
                counts,
                preview,
                my_status,
            });
        }

        Ok(CompositeView {
            week_start,
            days,
            events: week_events,
        })
    }

    /// Grid cells inside the window committed by the user's confirmed signups.
    async fn committed_cells_in_window(
        &self,
        user_id: i32,
        events: &[crate::model::event::Event],
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<CommittedCell>, AppError> {
        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();

        let signups = EventSignupRepository::new(self.db)
            .get_by_user_for_events(user_id, &event_ids)
            .await?;

        let mut cells = Vec::new();

        for signup in signups {
            if signup.status != SignupStatus::Confirmed {
                continue;
            }

            let Some(event) = events.iter().find(|e| e.id == signup.event_id) else {
                continue;
            };

            let clamped_start = event.start_time.max(window_start);
            let clamped_end = event.end_time.min(window_end);

            for (date, hour) in grid::event_hour_cells(clamped_start, clamped_end) {
                cells.push(CommittedCell {
                    date,
                    hour,
                    event_id: event.id,
                });
            }
        }

        Ok(cells)
    }

    /// Weekly slots covered by the user's upcoming confirmed events.
    ///
    /// Drives committed-slot preservation on template replacement.
    async fn committed_template_slots(
        &self,
        user_id: i32,
    ) -> Result<BTreeSet<TemplateSlot>, AppError> {
        let now = Utc::now();

        let events = EventSignupRepository::new(self.db)
            .get_confirmed_events_for_user(user_id, now)
            .await?;

        let mut slots = BTreeSet::new();

        for event in events {
            for (date, hour) in grid::event_hour_cells(event.start_time, event.end_time) {
                slots.insert(TemplateSlot {
                    weekday: grid::iso_weekday_of(date),
                    hour,
                });
            }
        }

        Ok(slots)
    }
}
