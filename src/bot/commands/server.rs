use serenity::all::Attachment;

use crate::{
    bot::Context,
    error::AppError,
    model::broadcast::{AttachmentRef, BroadcastMode, BroadcastRequest},
    service::broadcast::ChannelBroadcastService,
};

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum ModeChoice {
    #[name = "Text and Image"]
    Both,
    #[name = "Text Only"]
    Text,
    #[name = "Image Only"]
    Image,
}

impl From<ModeChoice> for BroadcastMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Both => BroadcastMode::Both,
            ModeChoice::Text => BroadcastMode::Text,
            ModeChoice::Image => BroadcastMode::Image,
        }
    }
}

/// Send a broadcast message to all ball spawn channels
#[poise::command(slash_command, prefix_command)]
pub async fn server(
    ctx: Context<'_>,
    #[description = "Broadcast mode"] mode: ModeChoice,
    #[description = "The text message to send"] message: Option<String>,
    #[description = "An optional image attachment"] attachment: Option<Attachment>,
    #[description = "Whether to hide the sender's name"] anonymous: Option<bool>,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let request = BroadcastRequest::new(
        mode.into(),
        message,
        attachment.as_ref().map(AttachmentRef::from),
        anonymous.unwrap_or(false),
        ctx.author().name.clone(),
    );

    let data = ctx.data();
    let service = ChannelBroadcastService::new(&data.db, &data.client);
    let prepared = service.prepare(&request).await?;

    ctx.say("Broadcasting message...").await?;
    if let Some(advisory) = &prepared.advisory {
        ctx.say(advisory).await?;
    }

    tracing::info!(
        "{} started a broadcast to {} channels",
        request.author,
        prepared.channels.len()
    );

    let report = service.deliver(&prepared).await;
    ctx.say(report.render()).await?;

    Ok(())
}
