use crate::data::guild_config::GuildConfigRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_admin_synced_guild_ids;
mod get_broadcast_channels;
