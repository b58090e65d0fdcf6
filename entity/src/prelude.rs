pub use super::character::Entity as Character;
pub use super::event::Entity as Event;
pub use super::event_signup::Entity as EventSignup;
pub use super::game_time_absence::Entity as GameTimeAbsence;
pub use super::game_time_override::Entity as GameTimeOverride;
pub use super::game_time_template::Entity as GameTimeTemplate;
pub use super::user::Entity as User;
pub use super::user_preference::Entity as UserPreference;
