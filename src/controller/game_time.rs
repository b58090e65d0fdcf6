//! Game-time planner endpoints.
//!
//! Weekdays cross this boundary in the client convention (0 = Sunday); the
//! service and storage use ISO weekdays (0 = Monday). All translation happens
//! here through `grid::{client_to_iso_weekday, iso_to_client_weekday}`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        game_time::{
            AbsenceDto, CompositeDayDto, CompositeSlotDto, CompositeWeekDto, CreateAbsenceDto,
            SaveTemplateDto, SaveTemplateResultDto, SetOverrideDto, TemplateDto, TemplateSlotDto,
            WeekEventDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        event::SignupEntry,
        game_time::{Absence, CompositeView, CreateAbsenceParams, TemplateSlot},
    },
    service::game_time::{grid, GameTimeService},
    state::AppState,
    util::parse::parse_iso_date,
};

/// Tag for grouping game-time endpoints in OpenAPI documentation
pub static GAME_TIME_TAG: &str = "game-time";

#[derive(Deserialize)]
pub struct WeekQuery {
    /// Any date inside the requested week, "YYYY-MM-DD". Defaults to today.
    pub start: Option<String>,
}

/// Get the current user's weekly availability template.
#[utoipa::path(
    get,
    path = "/api/game-time/template",
    tag = GAME_TIME_TAG,
    responses(
        (status = 200, description = "Weekly template slots", body = TemplateDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_template(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let slots = GameTimeService::new(&state.db).get_template(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(TemplateDto {
            slots: slots.iter().map(slot_to_dto).collect(),
        }),
    ))
}

/// Replace the weekly availability template.
///
/// Hours overlapping an upcoming event the caller is confirmed for are kept
/// even when the submitted set omits them; the response lists them under
/// `preserved`.
#[utoipa::path(
    put,
    path = "/api/game-time/template",
    tag = GAME_TIME_TAG,
    request_body = SaveTemplateDto,
    responses(
        (status = 200, description = "Stored template with preserved slots", body = SaveTemplateResultDto),
        (status = 400, description = "Slot outside the weekly grid", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn put_template(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let slots = payload
        .slots
        .into_iter()
        .map(slot_from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let result = GameTimeService::new(&state.db)
        .replace_template(user.id, slots)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SaveTemplateResultDto {
            slots: result.slots.iter().map(slot_to_dto).collect(),
            preserved: result.preserved.iter().map(slot_to_dto).collect(),
        }),
    ))
}

/// Get the composite weekly view.
///
/// Merges the recurring template, confirmed event commitments, per-date
/// overrides, and absences into a 7x24 grid, and lists the week's events
/// with their ranked signup previews.
#[utoipa::path(
    get,
    path = "/api/game-time/week",
    tag = GAME_TIME_TAG,
    params(
        ("start" = Option<String>, Query, description = "Any date inside the requested week (YYYY-MM-DD, default: today)")
    ),
    responses(
        (status = 200, description = "Composite weekly grid", body = CompositeWeekDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_week(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<WeekQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let start = query
        .start
        .as_deref()
        .map(parse_iso_date)
        .transpose()?;

    let view = GameTimeService::new(&state.db)
        .get_composite_view(user.id, start)
        .await?;

    Ok((StatusCode::OK, Json(view_to_dto(view))))
}

/// Set a per-date availability override for one hour slot.
#[utoipa::path(
    put,
    path = "/api/game-time/overrides/{date}/{hour}",
    tag = GAME_TIME_TAG,
    params(
        ("date" = String, Path, description = "Date of the override (YYYY-MM-DD)"),
        ("hour" = u8, Path, description = "Hour of day, 0-23")
    ),
    request_body = SetOverrideDto,
    responses(
        (status = 204, description = "Override stored"),
        (status = 400, description = "Invalid date, hour, or availability", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn put_override(
    State(state): State<AppState>,
    session: Session,
    Path((date, hour)): Path<(String, u8)>,
    Json(payload): Json<SetOverrideDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let date = parse_iso_date(&date)?;

    GameTimeService::new(&state.db)
        .set_override(user.id, date, hour, &payload.availability)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a per-date availability override.
#[utoipa::path(
    delete,
    path = "/api/game-time/overrides/{date}/{hour}",
    tag = GAME_TIME_TAG,
    params(
        ("date" = String, Path, description = "Date of the override (YYYY-MM-DD)"),
        ("hour" = u8, Path, description = "Hour of day, 0-23")
    ),
    responses(
        (status = 204, description = "Override removed"),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No override stored for that slot", body = ErrorDto)
    ),
)]
pub async fn delete_override(
    State(state): State<AppState>,
    session: Session,
    Path((date, hour)): Path<(String, u8)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let date = parse_iso_date(&date)?;

    GameTimeService::new(&state.db)
        .clear_override(user.id, date, hour)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the current user's absences.
#[utoipa::path(
    get,
    path = "/api/game-time/absences",
    tag = GAME_TIME_TAG,
    responses(
        (status = 200, description = "Absences ordered by start date", body = Vec<AbsenceDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_absences(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let absences = GameTimeService::new(&state.db).list_absences(user.id).await?;

    let dtos: Vec<AbsenceDto> = absences.into_iter().map(Absence::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an absence range.
#[utoipa::path(
    post,
    path = "/api/game-time/absences",
    tag = GAME_TIME_TAG,
    request_body = CreateAbsenceDto,
    responses(
        (status = 201, description = "Created absence", body = AbsenceDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_absence(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAbsenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let absence = GameTimeService::new(&state.db)
        .create_absence(CreateAbsenceParams {
            user_id: user.id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            reason: payload.reason,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(absence.into_dto())))
}

/// Delete one of the current user's absences.
#[utoipa::path(
    delete,
    path = "/api/game-time/absences/{id}",
    tag = GAME_TIME_TAG,
    params(
        ("id" = i32, Path, description = "Absence ID")
    ),
    responses(
        (status = 204, description = "Absence deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Absence not found", body = ErrorDto)
    ),
)]
pub async fn delete_absence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    GameTimeService::new(&state.db)
        .delete_absence(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn slot_to_dto(slot: &TemplateSlot) -> TemplateSlotDto {
    TemplateSlotDto {
        weekday: grid::iso_to_client_weekday(slot.weekday),
        hour: slot.hour,
    }
}

fn slot_from_dto(dto: TemplateSlotDto) -> Result<TemplateSlot, AppError> {
    let weekday = grid::client_to_iso_weekday(dto.weekday).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Weekday must be between 0 (Sunday) and 6 (Saturday), got {}",
            dto.weekday
        ))
    })?;

    Ok(TemplateSlot {
        weekday,
        hour: dto.hour,
    })
}

fn view_to_dto(view: CompositeView) -> CompositeWeekDto {
    CompositeWeekDto {
        week_start: view.week_start,
        days: view
            .days
            .into_iter()
            .map(|day| CompositeDayDto {
                date: day.date,
                weekday: grid::iso_to_client_weekday(day.weekday),
                slots: day
                    .slots
                    .into_iter()
                    .map(|slot| CompositeSlotDto {
                        hour: slot.hour,
                        status: slot.status.as_str().to_string(),
                        source: slot.source.as_str().to_string(),
                        event_id: slot.event_id,
                    })
                    .collect(),
            })
            .collect(),
        events: view
            .events
            .into_iter()
            .map(|week_event| WeekEventDto {
                id: week_event.event.id,
                title: week_event.event.title,
                start_time: week_event.event.start_time,
                end_time: week_event.event.end_time,
                signup_counts: week_event.counts.into_dto(),
                signup_preview: week_event
                    .preview
                    .into_iter()
                    .map(SignupEntry::into_dto)
                    .collect(),
                my_status: week_event.my_status.map(|s| s.as_str().to_string()),
            })
            .collect(),
    }
}
