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
        event::{
            CreateEventDto, CreateSignupDto, EventDto, PaginatedEventsDto, SignupDto,
            UpdateEventDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::event::{CreateEventParams, SignupEntry, UpdateEventParams},
    service::event::EventService,
    state::AppState,
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// List upcoming events, soonest first.
///
/// Events stay listed until one hour after they end.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated upcoming events", body = PaginatedEventsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require().await?;

    let events = EventService::new(&state.db)
        .list(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Create a new event.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let event = EventService::new(&state.db)
        .create(CreateEventParams {
            title: payload.title,
            description: payload.description,
            start_time: payload.start_time,
            end_time: payload.end_time,
            created_by: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Get event details with the ranked signup preview.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event details", body = EventDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let event = EventService::new(&state.db).get_detail(id, user.id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Update an event. Only the creator may edit.
#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not the event creator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let event = EventService::new(&state.db)
        .update(
            id,
            user.id,
            UpdateEventParams {
                title: payload.title,
                description: payload.description,
                start_time: payload.start_time,
                end_time: payload.end_time,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event. Only the creator may delete; signups cascade.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not the event creator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    EventService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create or replace the caller's signup on an event.
#[utoipa::path(
    put,
    path = "/api/events/{id}/signup",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = CreateSignupDto,
    responses(
        (status = 200, description = "Stored signup", body = SignupDto),
        (status = 400, description = "Invalid signup data or ended event", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn put_signup(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateSignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let entry = EventService::new(&state.db)
        .signup(
            id,
            user.id,
            &payload.status,
            payload.character_id,
            payload.note,
        )
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Withdraw the caller's signup from an event.
#[utoipa::path(
    delete,
    path = "/api/events/{id}/signup",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Signup withdrawn"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Not signed up for this event", body = ErrorDto)
    ),
)]
pub async fn delete_signup(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    EventService::new(&state.db).withdraw(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List all signups for an event in rank order.
#[utoipa::path(
    get,
    path = "/api/events/{id}/signups",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "All signups, confirmed first", body = Vec<SignupDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn list_signups(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require().await?;

    let entries = EventService::new(&state.db).list_signups(id).await?;

    let dtos: Vec<SignupDto> = entries.into_iter().map(SignupEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
