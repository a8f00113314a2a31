use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::{
    error::delivery::DeliveryError,
    model::{
        broadcast::{AttachmentRef, OutgoingMessage},
        discord::{ChannelInfo, UserInfo},
    },
    service::client::BroadcastClient,
};

mod broadcast;

/// In-memory client recording every send.
#[derive(Default)]
pub struct MockClient {
    channels: HashMap<u64, ChannelInfo>,
    users: HashMap<u64, UserInfo>,
    failing_channels: HashSet<u64>,
    closed_dms: HashSet<u64>,
    failing_dms: HashSet<u64>,
    download_fails: bool,
    pub channel_sends: Mutex<Vec<(u64, OutgoingMessage)>>,
    pub direct_messages: Mutex<Vec<(u64, String)>>,
    pub downloads: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches a channel in a guild named after its ID.
    pub fn with_channel(mut self, channel_id: u64, guild_id: u64) -> Self {
        self.channels.insert(
            channel_id,
            ChannelInfo {
                channel_id,
                channel_name: format!("spawn-{}", channel_id),
                guild_id,
                guild_name: format!("Guild {}", guild_id),
                member_count: 1234,
            },
        );
        self
    }

    pub fn with_failing_channel(mut self, channel_id: u64, guild_id: u64) -> Self {
        self.failing_channels.insert(channel_id);
        self.with_channel(channel_id, guild_id)
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.users.insert(
            user_id,
            UserInfo {
                user_id,
                name: format!("user{}", user_id),
            },
        );
        self
    }

    pub fn with_closed_dms(mut self, user_id: u64) -> Self {
        self.closed_dms.insert(user_id);
        self.with_user(user_id)
    }

    pub fn with_failing_dms(mut self, user_id: u64) -> Self {
        self.failing_dms.insert(user_id);
        self.with_user(user_id)
    }

    pub fn with_failing_download(mut self) -> Self {
        self.download_fails = true;
        self
    }

    pub fn sent_channel_ids(&self) -> Vec<u64> {
        self.channel_sends
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn send_count(&self) -> usize {
        self.channel_sends.lock().unwrap().len() + self.direct_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl BroadcastClient for MockClient {
    fn channel(&self, channel_id: u64) -> Option<ChannelInfo> {
        self.channels.get(&channel_id).cloned()
    }

    async fn send_to_channel(
        &self,
        channel_id: u64,
        message: &OutgoingMessage,
    ) -> Result<(), DeliveryError> {
        if self.failing_channels.contains(&channel_id) {
            return Err(DeliveryError::Discord(Box::new(serenity::Error::Other(
                "missing permissions",
            ))));
        }

        self.channel_sends
            .lock()
            .unwrap()
            .push((channel_id, message.clone()));
        Ok(())
    }

    async fn fetch_user(&self, user_id: u64) -> Result<Option<UserInfo>, DeliveryError> {
        Ok(self.users.get(&user_id).cloned())
    }

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), DeliveryError> {
        if self.closed_dms.contains(&user_id) {
            return Err(DeliveryError::Forbidden);
        }
        if self.failing_dms.contains(&user_id) {
            return Err(DeliveryError::Discord(Box::new(serenity::Error::Other(
                "gateway unavailable",
            ))));
        }

        self.direct_messages
            .lock()
            .unwrap()
            .push((user_id, content.to_string()));
        Ok(())
    }

    async fn download_attachment(
        &self,
        attachment: &AttachmentRef,
    ) -> Result<Vec<u8>, DeliveryError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);

        if self.download_fails {
            return Err(DeliveryError::NotFound);
        }

        Ok(attachment.filename.as_bytes().to_vec())
    }
}

pub fn attachment(filename: &str) -> AttachmentRef {
    AttachmentRef {
        url: format!("https://cdn.discordapp.com/attachments/1/2/{}", filename),
        filename: filename.to_string(),
        spoiler: filename.starts_with("SPOILER_"),
    }
}
