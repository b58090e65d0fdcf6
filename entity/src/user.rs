use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(unique)]
    pub discord_id: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::event_signup::Entity")]
    EventSignup,
    #[sea_orm(has_many = "super::game_time_absence::Entity")]
    GameTimeAbsence,
    #[sea_orm(has_many = "super::game_time_override::Entity")]
    GameTimeOverride,
    #[sea_orm(has_many = "super::game_time_template::Entity")]
    GameTimeTemplate,
    #[sea_orm(has_many = "super::user_preference::Entity")]
    UserPreference,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::event_signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventSignup.def()
    }
}

impl Related<super::game_time_absence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTimeAbsence.def()
    }
}

impl Related<super::game_time_override::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTimeOverride.def()
    }
}

impl Related<super::game_time_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTimeTemplate.def()
    }
}

impl Related<super::user_preference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPreference.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
