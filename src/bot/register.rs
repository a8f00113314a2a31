use serenity::all::{Context, GuildId};

use crate::{bot::Data, error::AppError};

/// Registers the command group in each guild with admin commands enabled.
///
/// A guild that rejects registration is logged and skipped.
///
/// # Arguments
/// - `ctx` - Serenity context used for the HTTP requests
/// - `commands` - Framework commands to register
/// - `guild_ids` - Guilds whose config has `admin_command_synced` set
///
/// # Returns
/// - `usize` - Number of guilds the commands were registered in
pub async fn register_commands(
    ctx: &Context,
    commands: &[poise::Command<Data, AppError>],
    guild_ids: &[u64],
) -> usize {
    let mut registered = 0;

    for &guild_id in guild_ids.iter().filter(|&&id| id != 0) {
        match poise::builtins::register_in_guild(ctx, commands, GuildId::new(guild_id)).await {
            Ok(()) => registered += 1,
            Err(e) => tracing::error!("Failed to register commands in guild {}: {:?}", guild_id, e),
        }
    }

    tracing::info!(
        "Registered broadcast commands in {}/{} guilds",
        registered,
        guild_ids.len()
    );

    registered
}
