use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::{data::guild_config::GuildConfigRepository, error::AppError};

pub struct ChannelResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the spawn channels every broadcast is sent to.
    ///
    /// Read once per command invocation; nothing is cached between invocations.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<u64>)` - Deduplicated channel IDs in ascending order
    /// - `Err(AppError::DbErr)` - Configuration query failed
    pub async fn resolve_broadcast_channels(&self) -> Result<BTreeSet<u64>, AppError> {
        let channels = GuildConfigRepository::new(self.db)
            .get_broadcast_channels()
            .await?;

        tracing::debug!("Resolved {} broadcast channels", channels.len());

        Ok(channels)
    }
}
