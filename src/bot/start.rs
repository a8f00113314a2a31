use sea_orm::DatabaseConnection;
use serenity::all::{ClientBuilder, GatewayIntents};

use crate::{
    bot::{
        client::SerenityBroadcastClient, commands, error::on_error, register::register_commands,
        Data,
    },
    config::Config,
    data::guild_config::GuildConfigRepository,
    error::AppError,
};

/// Starts the Discord bot and blocks until it shuts down.
///
/// Commands are registered per guild during framework setup, once the gateway
/// connection is ready.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection shared with every command invocation
/// - `http_client` - HTTP client used for attachment downloads
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError)` - Client construction or the gateway connection failed
pub async fn start_bot(
    config: &Config,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(), AppError> {
    // MESSAGE_CONTENT is privileged and only needed for prefix invocations
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let staff_role_ids = config.staff_role_ids.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::broadcast()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!("{} is connected to Discord", ready.user.name);

                let guild_ids = GuildConfigRepository::new(&db)
                    .get_admin_synced_guild_ids()
                    .await?;
                register_commands(ctx, &framework.options().commands, &guild_ids).await;

                Ok(Data {
                    client: SerenityBroadcastClient::new(
                        ctx.cache.clone(),
                        ctx.http.clone(),
                        http_client,
                    ),
                    db,
                    staff_role_ids,
                })
            })
        })
        .build();

    let mut client = ClientBuilder::new(&config.discord_bot_token, intents)
        .framework(framework)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
