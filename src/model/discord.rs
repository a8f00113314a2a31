/// Cached view of a guild text channel and the guild it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub channel_id: u64,
    pub channel_name: String,
    pub guild_id: u64,
    pub guild_name: String,
    pub member_count: u64,
}

impl ChannelInfo {
    /// Label identifying the channel in a failure list, e.g. `Ball Lovers - #spawns`.
    pub fn label(&self) -> String {
        format!("{} - #{}", self.guild_name, self.channel_name)
    }
}

/// A user fetched from Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user_id: u64,
    pub name: String,
}

/// Label for a channel that could not be resolved from the cache.
pub fn unknown_channel_label(channel_id: u64) -> String {
    format!("Unknown Channel (ID: {})", channel_id)
}
