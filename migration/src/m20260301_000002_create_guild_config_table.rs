use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(big_integer_uniq(GuildConfig::GuildId))
                    .col(big_integer_null(GuildConfig::SpawnChannel))
                    .col(boolean(GuildConfig::Enabled).default(true))
                    .col(boolean(GuildConfig::AdminCommandSynced).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    #[sea_orm(iden = "guildconfig")]
    Table,
    Id,
    GuildId,
    SpawnChannel,
    Enabled,
    AdminCommandSynced,
}
