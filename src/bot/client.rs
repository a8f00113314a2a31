use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{ChannelId, CreateAttachment, CreateMessage, Guild, UserId},
    cache::Cache,
    http::Http,
};

use crate::{
    error::delivery::DeliveryError,
    model::{
        broadcast::{AttachmentRef, OutgoingMessage},
        discord::{ChannelInfo, UserInfo},
    },
    service::client::BroadcastClient,
};

/// `BroadcastClient` backed by the gateway cache and Discord's HTTP API.
pub struct SerenityBroadcastClient {
    cache: Arc<Cache>,
    http: Arc<Http>,
    http_client: reqwest::Client,
}

impl SerenityBroadcastClient {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, http_client: reqwest::Client) -> Self {
        Self {
            cache,
            http,
            http_client,
        }
    }
}

/// Describes a channel of a cached guild, `None` when the guild has no such channel.
fn channel_info(guild: &Guild, channel_id: ChannelId) -> Option<ChannelInfo> {
    let channel = guild.channels.get(&channel_id)?;

    Some(ChannelInfo {
        channel_id: channel_id.get(),
        channel_name: channel.name.clone(),
        guild_id: guild.id.get(),
        guild_name: guild.name.clone(),
        member_count: guild.member_count,
    })
}

#[async_trait]
impl BroadcastClient for SerenityBroadcastClient {
    fn channel(&self, channel_id: u64) -> Option<ChannelInfo> {
        if channel_id == 0 {
            return None;
        }

        let channel_id = ChannelId::new(channel_id);
        self.cache.guilds().into_iter().find_map(|guild_id| {
            let guild = self.cache.guild(guild_id)?;
            channel_info(&guild, channel_id)
        })
    }

    async fn send_to_channel(
        &self,
        channel_id: u64,
        message: &OutgoingMessage,
    ) -> Result<(), DeliveryError> {
        if channel_id == 0 {
            return Err(DeliveryError::InvalidId(channel_id.to_string()));
        }

        let mut builder = CreateMessage::new();
        if let Some(content) = &message.content {
            builder = builder.content(content);
        }
        if let Some(file) = &message.file {
            builder = builder.add_file(CreateAttachment::bytes(
                file.data.to_vec(),
                file.upload_filename(),
            ));
        }

        ChannelId::new(channel_id)
            .send_message(&self.http, builder)
            .await?;

        Ok(())
    }

    async fn fetch_user(&self, user_id: u64) -> Result<Option<UserInfo>, DeliveryError> {
        if user_id == 0 {
            return Ok(None);
        }

        match self.http.get_user(UserId::new(user_id)).await {
            Ok(user) => Ok(Some(UserInfo {
                user_id,
                name: user.name,
            })),
            Err(e) => match DeliveryError::from(e) {
                DeliveryError::NotFound => Ok(None),
                other => Err(other),
            },
        }
    }

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), DeliveryError> {
        if user_id == 0 {
            return Err(DeliveryError::InvalidId(user_id.to_string()));
        }

        let channel = UserId::new(user_id).create_dm_channel(&self.http).await?;
        channel
            .id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn download_attachment(
        &self,
        attachment: &AttachmentRef,
    ) -> Result<Vec<u8>, DeliveryError> {
        let bytes = self
            .http_client
            .get(&attachment.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tracing::debug!(
            "Downloaded attachment {} ({} bytes)",
            attachment.filename,
            bytes.len()
        );

        Ok(bytes.to_vec())
    }
}
