pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_user_table;
mod m20260701_000002_create_user_preference_table;
mod m20260701_000003_create_character_table;
mod m20260702_000004_create_event_table;
mod m20260702_000005_create_event_signup_table;
mod m20260703_000006_create_game_time_template_table;
mod m20260703_000007_create_game_time_override_table;
mod m20260703_000008_create_game_time_absence_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_user_table::Migration),
            Box::new(m20260701_000002_create_user_preference_table::Migration),
            Box::new(m20260701_000003_create_character_table::Migration),
            Box::new(m20260702_000004_create_event_table::Migration),
            Box::new(m20260702_000005_create_event_signup_table::Migration),
            Box::new(m20260703_000006_create_game_time_template_table::Migration),
            Box::new(m20260703_000007_create_game_time_override_table::Migration),
            Box::new(m20260703_000008_create_game_time_absence_table::Migration),
        ]
    }
}
