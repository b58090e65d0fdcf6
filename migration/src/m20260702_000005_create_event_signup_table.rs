use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User, m20260701_000003_create_character_table::Character,
    m20260702_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventSignup::Table)
                    .if_not_exists()
                    .col(pk_auto(EventSignup::Id))
                    .col(integer(EventSignup::EventId))
                    .col(integer(EventSignup::UserId))
                    .col(integer_null(EventSignup::CharacterId))
                    .col(string(EventSignup::Status))
                    .col(text_null(EventSignup::Note))
                    .col(
                        timestamp(EventSignup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_signup_event_id")
                            .from(EventSignup::Table, EventSignup::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_signup_user_id")
                            .from(EventSignup::Table, EventSignup::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_signup_character_id")
                            .from(EventSignup::Table, EventSignup::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_signup_event_id_user_id")
                    .table(EventSignup::Table)
                    .col(EventSignup::EventId)
                    .col(EventSignup::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventSignup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventSignup {
    Table,
    Id,
    EventId,
    UserId,
    CharacterId,
    Status,
    Note,
    CreatedAt,
}
