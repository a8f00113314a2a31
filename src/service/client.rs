use async_trait::async_trait;

use crate::{
    error::delivery::DeliveryError,
    model::{
        broadcast::{AttachmentRef, OutgoingMessage},
        discord::{ChannelInfo, UserInfo},
    },
};

/// Chat platform operations the broadcast services depend on.
///
/// Implemented over Serenity's cache and HTTP client by the bot layer, and by an
/// in-memory recorder in the service tests.
#[async_trait]
pub trait BroadcastClient: Send + Sync {
    /// Looks a text channel and its guild up in the local cache.
    ///
    /// # Returns
    /// - `Some(ChannelInfo)` - Channel and guild are both cached
    /// - `None` - Unknown channel, or a channel outside any cached guild
    fn channel(&self, channel_id: u64) -> Option<ChannelInfo>;

    /// Sends one message, with optional text and file, to a channel.
    async fn send_to_channel(
        &self,
        channel_id: u64,
        message: &OutgoingMessage,
    ) -> Result<(), DeliveryError>;

    /// Fetches a user over the network.
    ///
    /// # Returns
    /// - `Ok(Some(UserInfo))` - User exists
    /// - `Ok(None)` - No user with this ID
    /// - `Err(DeliveryError)` - Request failed for any other reason
    async fn fetch_user(&self, user_id: u64) -> Result<Option<UserInfo>, DeliveryError>;

    /// Opens a DM channel with the user and sends the text.
    ///
    /// Returns `DeliveryError::Forbidden` when the recipient does not accept DMs.
    async fn send_direct_message(&self, user_id: u64, content: &str)
        -> Result<(), DeliveryError>;

    /// Downloads the bytes of an uploaded attachment.
    async fn download_attachment(&self, attachment: &AttachmentRef)
        -> Result<Vec<u8>, DeliveryError>;
}
