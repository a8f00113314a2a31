use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BallInstance::Table)
                    .if_not_exists()
                    .col(pk_auto(BallInstance::Id))
                    .col(integer(BallInstance::PlayerId))
                    .col(big_integer_null(BallInstance::ServerId))
                    .col(timestamp_with_time_zone(BallInstance::CatchDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ballinstance_player_id")
                            .from(BallInstance::Table, BallInstance::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Channel listings count and page catches per server
        manager
            .create_index(
                Index::create()
                    .name("idx_ballinstance_server_id_catch_date")
                    .table(BallInstance::Table)
                    .col(BallInstance::ServerId)
                    .col(BallInstance::CatchDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ballinstance_server_id_catch_date")
                    .table(BallInstance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BallInstance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BallInstance {
    #[sea_orm(iden = "ballinstance")]
    Table,
    Id,
    PlayerId,
    ServerId,
    CatchDate,
}
