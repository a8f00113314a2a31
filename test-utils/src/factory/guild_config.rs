//! Guild configuration factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configurations.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .spawn_channel(None)
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    spawn_channel: Option<u64>,
    enabled: bool,
    admin_command_synced: bool,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - spawn_channel: `Some(auto-incremented)`
    /// - enabled: `true`
    /// - admin_command_synced: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            spawn_channel: Some(next_id()),
            enabled: true,
            admin_command_synced: false,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn spawn_channel(mut self, spawn_channel: Option<u64>) -> Self {
        self.spawn_channel = spawn_channel;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn admin_command_synced(mut self, admin_command_synced: bool) -> Self {
        self.admin_command_synced = admin_command_synced;
        self
    }

    /// Builds and inserts the guild configuration.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id as i64),
            spawn_channel: ActiveValue::Set(self.spawn_channel.map(|id| id as i64)),
            enabled: ActiveValue::Set(self.enabled),
            admin_command_synced: ActiveValue::Set(self.admin_command_synced),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled guild configuration with a spawn channel.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
