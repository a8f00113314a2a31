//! The `broadcast` command group.

pub mod channels;
pub mod dm;
pub mod server;

use crate::{bot::check::is_staff, bot::Context, error::AppError};

use channels::channels;
use dm::dm;
use server::server;

/// Broadcast announcements to spawn channels or users.
///
/// Checks on the group apply to every subcommand.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    subcommands("channels", "server", "dm"),
    subcommand_required,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR",
    check = "is_staff"
)]
pub async fn broadcast(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}
