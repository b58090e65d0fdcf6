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
                    .table(GameTimeOverride::Table)
                    .if_not_exists()
                    .col(pk_auto(GameTimeOverride::Id))
                    .col(integer(GameTimeOverride::UserId))
                    .col(date(GameTimeOverride::Date))
                    .col(integer(GameTimeOverride::Hour))
                    .col(string(GameTimeOverride::Availability))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_time_override_user_id")
                            .from(GameTimeOverride::Table, GameTimeOverride::UserId)
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
                    .name("idx_game_time_override_user_id_date_hour")
                    .table(GameTimeOverride::Table)
                    .col(GameTimeOverride::UserId)
                    .col(GameTimeOverride::Date)
                    .col(GameTimeOverride::Hour)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTimeOverride::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTimeOverride {
    Table,
    Id,
    UserId,
    Date,
    Hour,
    Availability,
}
