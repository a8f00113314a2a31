//! Discord bot integration built on poise.
//!
//! The bot exposes a single `broadcast` command group to staff. Framework setup,
//! command registration and error reporting live here; the commands themselves are
//! thin adapters that turn poise arguments into service requests and render the
//! results back to the invoker.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Populates the guild and channel cache used to resolve spawn channels
//! - `GUILD_MESSAGES` - Receives prefix command invocations
//! - `MESSAGE_CONTENT` - Reads prefix command arguments (privileged intent)

pub mod check;
pub mod client;
pub mod commands;
pub mod error;
pub mod register;
pub mod start;

use sea_orm::DatabaseConnection;

use crate::{bot::client::SerenityBroadcastClient, error::AppError};

/// State shared by every command invocation.
pub struct Data {
    pub db: DatabaseConnection,
    pub client: SerenityBroadcastClient,
    pub staff_role_ids: Vec<u64>,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;
