use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::ball_instance::BallInstanceRepository,
    error::AppError,
    model::{catch::sole_catcher, discord::ChannelInfo, listing::ChannelListing},
    service::{client::BroadcastClient, resolver::ChannelResolver},
    util::format::format_thousands,
};

/// Catches a guild needs before its recent activity is inspected.
pub const SUSPICIOUS_CATCH_THRESHOLD: u64 = 20;

/// Number of most recent catches inspected for a single catcher.
pub const RECENT_CATCH_WINDOW: u64 = 10;

pub struct ChannelListingService<'a> {
    db: &'a DatabaseConnection,
    client: &'a dyn BroadcastClient,
}

impl<'a> ChannelListingService<'a> {
    pub fn new(db: &'a DatabaseConnection, client: &'a dyn BroadcastClient) -> Self {
        Self { db, client }
    }

    /// Describes every broadcast channel for the listing menu.
    ///
    /// Channels missing from the cache are skipped. A channel whose analytics query
    /// fails is logged and skipped; the rest of the listing still renders.
    ///
    /// # Returns
    /// - `Ok(ChannelListing::NoChannelsConfigured)` - No eligible guild config
    /// - `Ok(ChannelListing::NoChannelInformation)` - No channel could be described
    /// - `Ok(ChannelListing::Entries)` - One entry per described channel
    /// - `Err(AppError::DbErr)` - Channel resolution failed
    pub async fn list_channels(&self) -> Result<ChannelListing, AppError> {
        let channels = ChannelResolver::new(self.db)
            .resolve_broadcast_channels()
            .await?;
        if channels.is_empty() {
            return Ok(ChannelListing::NoChannelsConfigured);
        }

        let mut entries = Vec::with_capacity(channels.len());
        for channel_id in channels {
            let Some(channel) = self.client.channel(channel_id) else {
                tracing::debug!("Skipping channel {}: not in cache", channel_id);
                continue;
            };

            match self.describe_channel(&channel).await {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::error!("Error processing channel {}: {}", channel_id, e),
            }
        }

        if entries.is_empty() {
            return Ok(ChannelListing::NoChannelInformation);
        }

        Ok(ChannelListing::Entries(entries))
    }

    async fn describe_channel(&self, channel: &ChannelInfo) -> Result<String, DbErr> {
        let mut text = format!(
            "## {}\n- Channel: <#{}> (`{}`)\n- Guild ID: `{}`\n- Members: {}\n",
            channel.guild_name,
            channel.channel_id,
            channel.channel_id,
            channel.guild_id,
            format_thousands(channel.member_count)
        );

        if let Some(player) = self.sole_recent_catcher(channel.guild_id).await? {
            text.push_str(&format!(
                "- \u{26A0} **Last {} balls caught by <@{}>**\n",
                RECENT_CATCH_WINDOW, player
            ));
        }

        Ok(text)
    }

    /// Returns the player behind every recent catch in a busy guild.
    async fn sole_recent_catcher(&self, guild_id: u64) -> Result<Option<u64>, DbErr> {
        let repo = BallInstanceRepository::new(self.db);

        if repo.count_by_server(guild_id).await? < SUSPICIOUS_CATCH_THRESHOLD {
            return Ok(None);
        }

        let recent = repo
            .get_recent_by_server(guild_id, RECENT_CATCH_WINDOW)
            .await?;

        Ok(sole_catcher(&recent))
    }
}
