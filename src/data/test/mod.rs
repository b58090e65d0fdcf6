mod character;
mod event;
mod event_signup;
mod game_time_absence;
mod game_time_override;
mod game_time_template;
mod user;
mod user_preference;
