use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Raid Ledger API",
        description = "Guild event organization: characters, events, signups, and the game-time planner."
    ),
    tags(
        (name = "user", description = "Profile and preferences"),
        (name = "character", description = "Character management"),
        (name = "event", description = "Event scheduling and signups"),
        (name = "game-time", description = "Weekly availability planner")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user
        ))
        .routes(routes!(controller::user::get_preferences))
        .routes(routes!(controller::user::set_preference))
        .routes(routes!(
            controller::character::list_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::character::set_main_character))
        .routes(routes!(
            controller::event::list_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event,
            controller::event::delete_event
        ))
        .routes(routes!(
            controller::event::put_signup,
            controller::event::delete_signup
        ))
        .routes(routes!(controller::event::list_signups))
        .routes(routes!(
            controller::game_time::get_template,
            controller::game_time::put_template
        ))
        .routes(routes!(controller::game_time::get_week))
        .routes(routes!(
            controller::game_time::put_override,
            controller::game_time::delete_override
        ))
        .routes(routes!(
            controller::game_time::list_absences,
            controller::game_time::create_absence
        ))
        .routes(routes!(controller::game_time::delete_absence))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
