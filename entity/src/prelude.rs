pub use super::ball_instance::Entity as BallInstance;
pub use super::guild_config::Entity as GuildConfig;
pub use super::player::Entity as Player;
