use std::collections::BTreeSet;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the spawn channel of every guild with broadcasting enabled.
    ///
    /// Guilds that are disabled or have no spawn channel are excluded. Several guild
    /// configs pointing at the same channel yield a single entry.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<u64>)` - Deduplicated channel IDs in ascending order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_broadcast_channels(&self) -> Result<BTreeSet<u64>, DbErr> {
        let channels: Vec<Option<i64>> = entity::prelude::GuildConfig::find()
            .select_only()
            .column(entity::guild_config::Column::SpawnChannel)
            .filter(entity::guild_config::Column::Enabled.eq(true))
            .filter(entity::guild_config::Column::SpawnChannel.is_not_null())
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(channels
            .into_iter()
            .flatten()
            .map(|channel_id| channel_id as u64)
            .collect())
    }

    /// Gets the guilds whose admin commands should be registered.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - Guild IDs with `admin_command_synced` set
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_admin_synced_guild_ids(&self) -> Result<Vec<u64>, DbErr> {
        let guild_ids: Vec<i64> = entity::prelude::GuildConfig::find()
            .select_only()
            .column(entity::guild_config::Column::GuildId)
            .filter(entity::guild_config::Column::AdminCommandSynced.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(guild_ids.into_iter().map(|id| id as u64).collect())
    }
}
