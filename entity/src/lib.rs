//! SeaORM entities for the tables the broadcast commands read.
//!
//! The host bot owns these tables. The broadcast package only queries them,
//! so the models mirror just the columns it needs.

pub mod prelude;

pub mod ball_instance;
pub mod guild_config;
pub mod player;
