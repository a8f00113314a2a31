//! Factory methods for creating test data.
//!
//! Each table has a `Factory` builder for customization and a `create_*` function for
//! quick default creation. Factories fill in unique identifiers so tests never
//! collide on unique columns.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let config = factory::guild_config::create_guild_config(&db).await?;
//! let player = factory::player::create_player(&db).await?;
//!
//! // Customize
//! let disabled = factory::guild_config::GuildConfigFactory::new(&db)
//!     .enabled(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Guild configuration rows
//! - `player` - Player rows
//! - `ball_instance` - Catch records
//! - `helpers` - ID generation and multi-row helpers

pub mod ball_instance;
pub mod guild_config;
pub mod helpers;
pub mod player;

pub use ball_instance::create_ball_instance;
pub use guild_config::create_guild_config;
pub use helpers::create_catches;
pub use player::create_player;
