use crate::{
    bot::Context, error::AppError, model::broadcast::DirectMessageRequest,
    service::dm::DirectMessageService,
};

/// Send a DM broadcast to specific users
#[poise::command(slash_command, prefix_command)]
pub async fn dm(
    ctx: Context<'_>,
    #[description = "The message you are going to send"] message: String,
    #[description = "A comma-separated list of user IDs"] user_ids: String,
    #[description = "Whether to hide the sender's name"] anonymous: Option<bool>,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let request = DirectMessageRequest::new(
        message,
        &user_ids,
        anonymous.unwrap_or(false),
        ctx.author().name.clone(),
    )?;

    ctx.say("Starting DM broadcast...").await?;

    tracing::info!(
        "{} started a DM broadcast to {} users",
        request.author,
        request.user_ids.len()
    );

    let report = DirectMessageService::new(&ctx.data().client)
        .broadcast_to_users(&request)
        .await;
    ctx.say(report.render()).await?;

    Ok(())
}
