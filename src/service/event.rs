use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        character::CharacterRepository, event::EventRepository,
        event_signup::EventSignupRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::event::{
        CreateEventParams, Event, EventDetail, EventListItem, PaginatedEvents, Signup,
        SignupCounts, SignupEntry, SignupStatus, UpdateEventParams, UpsertSignupParams,
    },
};

/// Maximum length of an event title.
const MAX_TITLE_LEN: usize = 96;

/// Maximum length of a signup note.
const MAX_NOTE_LEN: usize = 256;

/// At most this many signups appear in an event's preview.
pub const SIGNUP_PREVIEW_LIMIT: u64 = 6;

/// Events stay in the upcoming list until they have been over for this long.
const LISTING_GRACE_SECS: i64 = 3600;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event.
    ///
    /// # Arguments
    /// - `params`: Event creation data with raw time strings
    ///
    /// # Returns
    /// - `Ok(EventDetail)`: The created event with enriched data
    /// - `Err(AppError::BadRequest)`: Validation failure (title, time format,
    ///   start in the past, end not after start)
    pub async fn create(&self, params: CreateEventParams) -> Result<EventDetail, AppError> {
        let title = params.title.trim().to_string();
        Self::validate_title(&title)?;

        let start_time = Self::parse_start_time(&params.start_time, None)?;
        let end_time = Self::parse_end_time(&params.end_time, start_time)?;

        let event = EventRepository::new(self.db)
            .create(
                title,
                params.description,
                start_time,
                end_time,
                params.created_by,
            )
            .await?;

        self.get_detail(event.id, params.created_by).await
    }

    /// Gets an event with creator name, counts, preview, and viewer status.
    ///
    /// # Returns
    /// - `Ok(EventDetail)`: The enriched event
    /// - `Err(AppError::NotFound)`: No such event
    pub async fn get_detail(&self, event_id: i32, viewer_id: i32) -> Result<EventDetail, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let creator_name = self.username_of(event.created_by).await?;
        let (counts, preview, my_status) = self.signup_summary(event_id, viewer_id).await?;

        Ok(EventDetail {
            event,
            creator_name,
            counts,
            preview,
            my_status,
        })
    }

    /// Gets paginated events that are upcoming or recently over.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(PaginatedEvents)`: Event rows enriched with creator names and
    ///   per-status signup counts
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedEvents, AppError> {
        let per_page = per_page.clamp(1, 100);
        let cutoff = Utc::now() - Duration::seconds(LISTING_GRACE_SECS);
        let (events, total) = EventRepository::new(self.db)
            .get_paginated(cutoff, page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page);

        let signup_repo = EventSignupRepository::new(self.db);
        let mut rows = Vec::new();

        for event in events {
            let creator_name = self.username_of(event.created_by).await?;
            let counts = signup_repo.counts_by_event(event.id).await?;

            rows.push(EventListItem {
                event,
                creator_name,
                counts,
            });
        }

        Ok(PaginatedEvents {
            events: rows,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates an event.
    ///
    /// Only the creator may edit. A start time that is already in the past
    /// may be kept but not moved earlier.
    ///
    /// # Returns
    /// - `Ok(EventDetail)`: The updated event with enriched data
    /// - `Err(AppError::AuthErr(AccessDenied))`: Caller is not the creator
    /// - `Err(AppError::NotFound)`: No such event
    /// - `Err(AppError::BadRequest)`: Validation failure
    pub async fn update(
        &self,
        event_id: i32,
        user_id: i32,
        params: UpdateEventParams,
    ) -> Result<EventDetail, AppError> {
        let repo = EventRepository::new(self.db);
        let event = self.get_owned(&repo, event_id, user_id).await?;

        let title = params.title.trim().to_string();
        Self::validate_title(&title)?;

        let start_time = Self::parse_start_time(&params.start_time, Some(event.start_time))?;
        let end_time = Self::parse_end_time(&params.end_time, start_time)?;

        repo.update(event_id, title, params.description, start_time, end_time)
            .await?;

        self.get_detail(event_id, user_id).await
    }

    /// Deletes an event. Only the creator may delete; signups cascade.
    pub async fn delete(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);
        self.get_owned(&repo, event_id, user_id).await?;

        repo.delete(event_id).await
    }

    /// Creates or replaces the caller's signup on an event.
    ///
    /// # Arguments
    /// - `event_id`: Event to sign up for
    /// - `user_id`: Signing user
    /// - `status_raw`: Client status string
    /// - `character_id`: Character to bring; must belong to the caller
    /// - `note`: Optional note to the organizer
    ///
    /// # Returns
    /// - `Ok(SignupEntry)`: The stored signup with user and character names
    /// - `Err(AppError::NotFound)`: No such event
    /// - `Err(AppError::BadRequest)`: Ended event, unknown status, overlong
    ///   note, or a character the caller does not own
    pub async fn signup(
        &self,
        event_id: i32,
        user_id: i32,
        status_raw: &str,
        character_id: Option<i32>,
        note: Option<String>,
    ) -> Result<SignupEntry, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if event.end_time <= Utc::now() {
            return Err(AppError::BadRequest(
                "This event has already ended".to_string(),
            ));
        }

        let status = SignupStatus::parse(status_raw).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown signup status '{}'. Expected confirmed, tentative, or declined",
                status_raw
            ))
        })?;

        if let Some(note) = &note {
            if note.len() > MAX_NOTE_LEN {
                return Err(AppError::BadRequest(format!(
                    "Note cannot be longer than {} characters",
                    MAX_NOTE_LEN
                )));
            }
        }

        if let Some(character_id) = character_id {
            let character = CharacterRepository::new(self.db)
                .get_by_id(character_id)
                .await?;

            match character {
                Some(character) if character.user_id == user_id => {}
                _ => {
                    return Err(AppError::BadRequest(
                        "Invalid character selection".to_string(),
                    ))
                }
            }
        }

        let signup = EventSignupRepository::new(self.db)
            .upsert(UpsertSignupParams {
                event_id,
                user_id,
                character_id,
                status,
                note,
            })
            .await?;

        self.enrich_signup(signup).await
    }

    /// Removes the caller's signup from an event.
    ///
    /// # Returns
    /// - `Ok(())`: Signup removed
    /// - `Err(AppError::NotFound)`: The caller was not signed up
    pub async fn withdraw(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        let removed = EventSignupRepository::new(self.db)
            .delete_by_event_and_user(event_id, user_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(
                "You are not signed up for this event".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets an event's full signup list in rank order.
    ///
    /// # Returns
    /// - `Ok(Vec<SignupEntry>)`: All signups, enriched
    /// - `Err(AppError::NotFound)`: No such event
    pub async fn list_signups(&self, event_id: i32) -> Result<Vec<SignupEntry>, AppError> {
        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let signups = EventSignupRepository::new(self.db)
            .get_ranked_by_event(event_id, None)
            .await?;

        self.enrich_signups(signups).await
    }

    /// Builds the counts / ranked preview / viewer-status triple for an event.
    ///
    /// Shared with the game-time composite view, which renders the same
    /// preview for every event in the requested week.
    pub async fn signup_summary(
        &self,
        event_id: i32,
        viewer_id: i32,
    ) -> Result<(SignupCounts, Vec<SignupEntry>, Option<SignupStatus>), AppError> {
        let signup_repo = EventSignupRepository::new(self.db);

        let counts = signup_repo.counts_by_event(event_id).await?;
        let ranked = signup_repo
            .get_ranked_by_event(event_id, Some(SIGNUP_PREVIEW_LIMIT))
            .await?;
        let preview = self.enrich_signups(ranked).await?;
        let my_status = signup_repo
            .find_by_event_and_user(event_id, viewer_id)
            .await?
            .map(|s| s.status);

        Ok((counts, preview, my_status))
    }

    /// Attaches usernames and character data to signups.
    ///
    /// Signups whose user row has disappeared are skipped.
    async fn enrich_signups(&self, signups: Vec<Signup>) -> Result<Vec<SignupEntry>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let mut entries = Vec::new();

        for signup in signups {
            let Some(user) = user_repo.find_by_id(signup.user_id).await? else {
                continue;
            };

            let character = match signup.character_id {
                Some(id) => character_repo.get_by_id(id).await?,
                None => None,
            };

            entries.push(SignupEntry {
                signup,
                username: user.username,
                character,
            });
        }

        Ok(entries)
    }

    async fn enrich_signup(&self, signup: Signup) -> Result<SignupEntry, AppError> {
        let mut entries = self.enrich_signups(vec![signup]).await?;

        entries
            .pop()
            .ok_or_else(|| AppError::InternalError("Signup user disappeared".to_string()))
    }

    async fn username_of(&self, user_id: i32) -> Result<String, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|u| u.username)
            .unwrap_or_else(|| "Unknown".to_string()))
    }

    /// Loads an event and checks the caller created it.
    async fn get_owned(
        &self,
        repo: &EventRepository<'a>,
        event_id: i32,
        user_id: i32,
    ) -> Result<Event, AppError> {
        let event = repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if event.created_by != user_id {
            return Err(AuthError::AccessDenied {
                user_id,
                reason: format!("User is not the creator of event {}", event_id),
            }
            .into());
        }

        Ok(event)
    }

    fn validate_title(title: &str) -> Result<(), AppError> {
        if title.is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty".to_string()));
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(AppError::BadRequest(format!(
                "Title cannot be longer than {} characters",
                MAX_TITLE_LEN
            )));
        }
        Ok(())
    }

    /// Parses an event start time from "YYYY-MM-DD HH:MM" format or "now".
    ///
    /// Validates that the start is not in the past. When `min_time` is given
    /// (edits) and is itself in the past, the start may stay at or after
    /// `min_time` instead, so an already-started event can keep its time.
    ///
    /// # Arguments
    /// - `time_str`: Time string in format "YYYY-MM-DD HH:MM" or "now"
    ///   (case-insensitive)
    /// - `min_time`: Original start time when editing an existing event
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)`: Parsed start time
    /// - `Err(AppError::BadRequest)`: Invalid format or time validation failure
    fn parse_start_time(
        time_str: &str,
        min_time: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, AppError> {
        let now = Utc::now();

        // Handle "now" shorthand (case-insensitive)
        let start_time = if time_str.trim().eq_ignore_ascii_case("now") {
            now
        } else {
            Self::parse_utc(time_str)?
        };

        // If min_time is provided and is in the past, validate against min_time
        if let Some(min_time) = min_time {
            if min_time < now && start_time < min_time {
                return Err(AppError::BadRequest(format!(
                    "Start time cannot be set earlier than the original time ({})",
                    min_time.format("%Y-%m-%d %H:%M UTC")
                )));
            }
        }

        // Validate start is not in the past (only if min_time is not provided or is in the future)
        if (min_time.is_none() || min_time.map(|t| t >= now).unwrap_or(true)) && start_time < now {
            return Err(AppError::BadRequest(
                "Start time cannot be in the past".to_string(),
            ));
        }

        Ok(start_time)
    }

    /// Parses an event end time and validates it comes after the start.
    fn parse_end_time(
        time_str: &str,
        start_time: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, AppError> {
        let end_time = Self::parse_utc(time_str)?;

        if end_time <= start_time {
            return Err(AppError::BadRequest(
                "End time must be after the start time".to_string(),
            ));
        }

        Ok(end_time)
    }

    fn parse_utc(time_str: &str) -> Result<DateTime<Utc>, AppError> {
        NaiveDateTime::parse_from_str(time_str.trim(), "%Y-%m-%d %H:%M")
            .map(|naive| naive.and_utc())
            .map_err(|e| {
                AppError::BadRequest(format!(
                    "Invalid time format. Expected 'YYYY-MM-DD HH:MM', got '{}': {}",
                    time_str, e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(time: DateTime<Utc>) -> String {
        time.format("%Y-%m-%d %H:%M").to_string()
    }

    #[test]
    fn parses_now_shorthand() {
        let before = Utc::now();
        let parsed = EventService::parse_start_time("NOW", None).unwrap();
        assert!(parsed >= before);
    }

    #[test]
    fn rejects_start_in_the_past() {
        let past = Utc::now() - Duration::hours(2);
        let result = EventService::parse_start_time(&format(past), None);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_malformed_time() {
        let result = EventService::parse_start_time("tomorrow at eight", None);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn allows_keeping_a_past_start_when_editing() {
        let original = Utc::now() - Duration::hours(2);
        let parsed = EventService::parse_start_time(&format(original), Some(original)).unwrap();
        assert_eq!(format(parsed), format(original));
    }

    #[test]
    fn rejects_moving_a_past_start_earlier() {
        let original = Utc::now() - Duration::hours(2);
        let earlier = original - Duration::hours(1);
        let result = EventService::parse_start_time(&format(earlier), Some(original));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_end_before_start() {
        let start = Utc::now() + Duration::hours(3);
        let end = start - Duration::hours(1);
        let result = EventService::parse_end_time(&format(end), start);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn accepts_end_after_start() {
        let start = Utc::now() + Duration::hours(3);
        let end = start + Duration::hours(2);
        assert!(EventService::parse_end_time(&format(end), start).is_ok());
    }
}
