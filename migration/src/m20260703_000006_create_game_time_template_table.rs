use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameTimeTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(GameTimeTemplate::Id))
                    .col(integer(GameTimeTemplate::UserId))
                    .col(integer(GameTimeTemplate::Weekday))
                    .col(integer(GameTimeTemplate::Hour))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_time_template_user_id")
                            .from(GameTimeTemplate::Table, GameTimeTemplate::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_time_template_user_id_weekday_hour")
                    .table(GameTimeTemplate::Table)
                    .col(GameTimeTemplate::UserId)
                    .col(GameTimeTemplate::Weekday)
                    .col(GameTimeTemplate::Hour)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTimeTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTimeTemplate {
    Table,
    Id,
    UserId,
    Weekday,
    Hour,
}
