//! API data transfer objects.
//!
//! Serde-serializable request and response bodies for every endpoint. DTOs carry
//! `utoipa::ToSchema` derives so the OpenAPI document stays in sync with the
//! actual wire types. Domain models convert to and from these at the controller
//! boundary.

pub mod api;
pub mod character;
pub mod event;
pub mod game_time;
pub mod user;
