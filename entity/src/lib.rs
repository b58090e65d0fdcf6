//! SeaORM entity models for the Raid Ledger database schema.

pub mod prelude;

pub mod character;
pub mod event;
pub mod event_signup;
pub mod game_time_absence;
pub mod game_time_override;
pub mod game_time_template;
pub mod user;
pub mod user_preference;
