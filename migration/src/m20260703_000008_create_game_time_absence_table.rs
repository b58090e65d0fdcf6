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
                    .table(GameTimeAbsence::Table)
                    .if_not_exists()
                    .col(pk_auto(GameTimeAbsence::Id))
                    .col(integer(GameTimeAbsence::UserId))
                    .col(date(GameTimeAbsence::StartDate))
                    .col(date(GameTimeAbsence::EndDate))
                    .col(string_null(GameTimeAbsence::Reason))
                    .col(
                        timestamp(GameTimeAbsence::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_time_absence_user_id")
                            .from(GameTimeAbsence::Table, GameTimeAbsence::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTimeAbsence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTimeAbsence {
    Table,
    Id,
    UserId,
    StartDate,
    EndDate,
    Reason,
    CreatedAt,
}
