//! Channel broadcast flow.
//!
//! A broadcast runs in two steps so the command layer can report progress in
//! between: `prepare` validates the request, resolves the channels and downloads the
//! attachment once, then `deliver` fans the prepared message out to every channel.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::{
    error::{validation::ValidationError, AppError},
    model::{
        broadcast::{BroadcastFile, BroadcastRequest, OutgoingMessage},
        discord::unknown_channel_label,
        report::{BroadcastReport, DeliveryOutcome, TargetKind},
    },
    service::{
        client::BroadcastClient, fan_out::fan_out, message::compose_announcement,
        resolver::ChannelResolver,
    },
};

const DOWNLOAD_FAILED_NOTICE: &str = "An error occurred while downloading the attachment.";
const TEXT_ONLY_NOTICE: &str = " Only the text message will be sent.";

/// A validated broadcast ready to be delivered.
#[derive(Debug, Clone)]
pub struct PreparedBroadcast {
    pub channels: BTreeSet<u64>,
    pub message: OutgoingMessage,
    /// Notice for the invoker when the attachment could not be downloaded.
    pub advisory: Option<String>,
}

/// Outcome of a complete channel broadcast.
#[derive(Debug, Clone)]
pub struct ChannelBroadcastOutcome {
    pub advisory: Option<String>,
    pub report: BroadcastReport,
}

pub struct ChannelBroadcastService<'a> {
    db: &'a DatabaseConnection,
    client: &'a dyn BroadcastClient,
}

impl<'a> ChannelBroadcastService<'a> {
    pub fn new(db: &'a DatabaseConnection, client: &'a dyn BroadcastClient) -> Self {
        Self { db, client }
    }

    /// Validates, prepares and delivers a broadcast in one call.
    ///
    /// # Returns
    /// - `Ok(ChannelBroadcastOutcome)` - Broadcast attempted on every channel
    /// - `Err(AppError::ValidationErr)` - Request rejected before any send
    /// - `Err(AppError::DbErr)` - Channel resolution failed
    pub async fn broadcast_to_channels(
        &self,
        request: &BroadcastRequest,
    ) -> Result<ChannelBroadcastOutcome, AppError> {
        let prepared = self.prepare(request).await?;
        let report = self.deliver(&prepared).await;

        Ok(ChannelBroadcastOutcome {
            advisory: prepared.advisory,
            report,
        })
    }

    /// Validates the request and builds the message shared by every channel.
    ///
    /// The attachment is downloaded at most once. A failed download is logged and
    /// turned into an advisory; the broadcast then continues with whatever text
    /// remains.
    ///
    /// # Arguments
    /// - `request` - The broadcast as entered by the invoker
    ///
    /// # Returns
    /// - `Ok(PreparedBroadcast)` - Channels resolved and message composed
    /// - `Err(AppError::ValidationErr)` - Mode requirements not met, or no channels
    /// - `Err(AppError::DbErr)` - Channel resolution failed
    pub async fn prepare(&self, request: &BroadcastRequest) -> Result<PreparedBroadcast, AppError> {
        request.validate()?;

        let channels = ChannelResolver::new(self.db)
            .resolve_broadcast_channels()
            .await?;
        if channels.is_empty() {
            return Err(ValidationError::NoChannelsConfigured.into());
        }

        let content = request
            .message
            .as_deref()
            .filter(|_| request.mode.sends_text())
            .map(|message| compose_announcement(message, request.signature()));

        let mut advisory = None;
        let file = match &request.attachment {
            Some(attachment) if request.mode.sends_file() => {
                match self.client.download_attachment(attachment).await {
                    Ok(data) => Some(BroadcastFile::new(attachment, data)),
                    Err(e) => {
                        tracing::error!("Error downloading attachment {}: {}", attachment.url, e);
                        advisory = Some(download_advisory(content.is_some()));
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(PreparedBroadcast {
            channels,
            message: OutgoingMessage { content, file },
            advisory,
        })
    }

    /// Sends the prepared message to every channel.
    ///
    /// # Returns
    /// - `BroadcastReport` - One outcome per resolved channel
    pub async fn deliver(&self, prepared: &PreparedBroadcast) -> BroadcastReport {
        let report = fan_out(
            TargetKind::Channels,
            prepared.channels.iter().copied(),
            |channel_id| self.deliver_to_channel(channel_id, &prepared.message),
        )
        .await;

        tracing::info!(
            "Channel broadcast finished: {} sent, {} failed",
            report.success_count,
            report.fail_count
        );

        report
    }

    async fn deliver_to_channel(&self, channel_id: u64, message: &OutgoingMessage) -> DeliveryOutcome {
        let Some(channel) = self.client.channel(channel_id) else {
            tracing::debug!("Channel {} is not in the cache", channel_id);
            return DeliveryOutcome::Failed(unknown_channel_label(channel_id));
        };

        if message.is_empty() {
            return DeliveryOutcome::Failed(format!("{} (attachment unavailable)", channel.label()));
        }

        match self.client.send_to_channel(channel_id, message).await {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(e) => {
                tracing::error!("Error broadcasting to channel {}: {:?}", channel_id, e);
                DeliveryOutcome::Failed(channel.label())
            }
        }
    }
}

fn download_advisory(text_remains: bool) -> String {
    if text_remains {
        format!("{}{}", DOWNLOAD_FAILED_NOTICE, TEXT_ONLY_NOTICE)
    } else {
        DOWNLOAD_FAILED_NOTICE.to_string()
    }
}
