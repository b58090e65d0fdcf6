use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        user::{PreferenceDto, PreferencesDto, SetPreferenceDto, UpdateUserDto, UserDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the current user's profile.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the current user's display name.
#[utoipa::path(
    patch,
    path = "/api/user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid username", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let updated = UserService::new(&state.db)
        .update_username(user.id, &payload.username)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Get all of the current user's preferences.
#[utoipa::path(
    get,
    path = "/api/user/preferences",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Stored preferences keyed by name", body = PreferencesDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let preferences = UserService::new(&state.db).get_preferences(user.id).await?;

    let map: HashMap<String, serde_json::Value> = preferences
        .into_iter()
        .map(|p| (p.key, p.value))
        .collect();

    Ok((
        StatusCode::OK,
        Json(PreferencesDto { preferences: map }),
    ))
}

/// Store one preference value, replacing any previous value for the key.
#[utoipa::path(
    put,
    path = "/api/user/preferences/{key}",
    tag = USER_TAG,
    params(
        ("key" = String, Path, description = "Preference key")
    ),
    request_body = SetPreferenceDto,
    responses(
        (status = 200, description = "Stored preference", body = PreferenceDto),
        (status = 400, description = "Invalid preference key", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn set_preference(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
    Json(payload): Json<SetPreferenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let preference = UserService::new(&state.db)
        .set_preference(user.id, &key, payload.value)
        .await?;

    Ok((StatusCode::OK, Json(preference.into_dto())))
}
