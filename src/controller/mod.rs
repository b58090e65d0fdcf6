//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs to
//! operation parameters, invoke services, and convert results back to DTOs.
//! Every handler carries a `utoipa::path` annotation feeding the OpenAPI
//! document served at `/docs`.

pub mod character;
pub mod event;
pub mod game_time;
pub mod user;
