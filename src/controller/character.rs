use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::character::{Character, UpdateCharacterParams},
    service::character::CharacterService,
    state::AppState,
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// List the current user's characters, mains first.
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "The user's characters", body = Vec<CharacterDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let characters = CharacterService::new(&state.db, state.game_data.as_ref())
        .list(user.id)
        .await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(Character::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new character.
///
/// The first character created for a game becomes that game's main. When a
/// game-data API is configured and no class was supplied, the class is
/// looked up from it.
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Duplicate character name for this game", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let character = CharacterService::new(&state.db, state.game_data.as_ref())
        .create(
            user.id,
            payload.game,
            payload.name,
            payload.class,
            payload.role,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Update a character's name, class, or role.
#[utoipa::path(
    patch,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Updated character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 409, description = "Duplicate character name for this game", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = UpdateCharacterParams {
        name: payload.name,
        class: payload.class,
        role: payload.role,
    };

    let character = CharacterService::new(&state.db, state.game_data.as_ref())
        .update(user.id, id, params)
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
#[utoipa::path(
    delete,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    CharacterService::new(&state.db, state.game_data.as_ref())
        .delete(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Promote a character to main for its game.
///
/// The current main of the same game is demoted in the same transaction.
#[utoipa::path(
    post,
    path = "/api/characters/{id}/main",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The promoted character", body = CharacterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto)
    ),
)]
pub async fn set_main_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let character = CharacterService::new(&state.db, state.game_data.as_ref())
        .set_main(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
