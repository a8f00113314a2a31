mod ball_instance;
mod guild_config;
