use std::sync::Arc;

use serenity::all::Attachment;

use crate::{error::validation::ValidationError, util::parse::parse_user_ids};

/// Filename prefix Discord uses to mark an attachment as a spoiler.
const SPOILER_PREFIX: &str = "SPOILER_";

/// What a channel broadcast sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastMode {
    /// The announcement text only.
    Text,
    /// The attached file only.
    Image,
    /// Whichever of text and file are available, combined into one message.
    Both,
}

impl BroadcastMode {
    /// Whether the composed announcement text is part of the outgoing message.
    pub fn sends_text(self) -> bool {
        !matches!(self, BroadcastMode::Image)
    }

    /// Whether the attachment is downloaded and re-sent.
    pub fn sends_file(self) -> bool {
        !matches!(self, BroadcastMode::Text)
    }
}

/// Reference to an uploaded attachment that has not been downloaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    /// Direct download URL.
    pub url: String,
    /// Original filename, including any spoiler prefix.
    pub filename: String,
    /// Whether the upload was marked as a spoiler.
    pub spoiler: bool,
}

impl From<&Attachment> for AttachmentRef {
    fn from(attachment: &Attachment) -> Self {
        Self {
            url: attachment.url.clone(),
            filename: attachment.filename.clone(),
            spoiler: attachment.filename.starts_with(SPOILER_PREFIX),
        }
    }
}

/// A channel broadcast as requested by a staff member.
#[derive(Debug, Clone)]
pub struct BroadcastRequest {
    pub mode: BroadcastMode,
    /// Announcement text; empty input is normalized to `None`.
    pub message: Option<String>,
    pub attachment: Option<AttachmentRef>,
    /// Hide the "Sent by" line.
    pub anonymous: bool,
    /// Display name of the invoking staff member.
    pub author: String,
}

impl BroadcastRequest {
    pub fn new(
        mode: BroadcastMode,
        message: Option<String>,
        attachment: Option<AttachmentRef>,
        anonymous: bool,
        author: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            message: message.filter(|message| !message.is_empty()),
            attachment,
            anonymous,
            author: author.into(),
        }
    }

    /// Checks that the request carries the content its mode requires.
    ///
    /// # Returns
    /// - `Ok(())` - The request can be broadcast
    /// - `Err(ValidationError::MissingMessage)` - Text mode without a message
    /// - `Err(ValidationError::MissingImage)` - Image mode without an attachment
    /// - `Err(ValidationError::MissingContent)` - Both mode with neither
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            BroadcastMode::Text if self.message.is_none() => Err(ValidationError::MissingMessage),
            BroadcastMode::Image if self.attachment.is_none() => {
                Err(ValidationError::MissingImage)
            }
            BroadcastMode::Both if self.message.is_none() && self.attachment.is_none() => {
                Err(ValidationError::MissingContent)
            }
            _ => Ok(()),
        }
    }

    /// Author name for the "Sent by" line, `None` when anonymous.
    pub fn signature(&self) -> Option<&str> {
        (!self.anonymous).then_some(self.author.as_str())
    }
}

/// Direct message broadcast to an explicit list of users.
#[derive(Debug, Clone)]
pub struct DirectMessageRequest {
    pub message: String,
    /// Trimmed, non-empty raw identifiers in input order. Not yet parsed.
    pub user_ids: Vec<String>,
    pub anonymous: bool,
    pub author: String,
}

impl DirectMessageRequest {
    /// Builds a request from the raw comma-separated identifier list.
    ///
    /// # Returns
    /// - `Ok(DirectMessageRequest)` - At least one identifier was given
    /// - `Err(ValidationError::NoUserIds)` - The list was empty after trimming
    pub fn new(
        message: impl Into<String>,
        user_ids: &str,
        anonymous: bool,
        author: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let user_ids = parse_user_ids(user_ids);
        if user_ids.is_empty() {
            return Err(ValidationError::NoUserIds);
        }

        Ok(Self {
            message: message.into(),
            user_ids,
            anonymous,
            author: author.into(),
        })
    }

    /// Author name for the "Sent by" line, `None` when anonymous.
    pub fn signature(&self) -> Option<&str> {
        (!self.anonymous).then_some(self.author.as_str())
    }
}

/// Downloaded attachment, shared read-only by every channel send.
#[derive(Debug, Clone)]
pub struct BroadcastFile {
    pub filename: String,
    pub data: Arc<[u8]>,
    pub spoiler: bool,
}

impl BroadcastFile {
    pub fn new(attachment: &AttachmentRef, data: Vec<u8>) -> Self {
        Self {
            filename: attachment.filename.clone(),
            data: data.into(),
            spoiler: attachment.spoiler,
        }
    }

    /// Filename to upload under, carrying the spoiler prefix when needed.
    pub fn upload_filename(&self) -> String {
        if self.spoiler && !self.filename.starts_with(SPOILER_PREFIX) {
            format!("{}{}", SPOILER_PREFIX, self.filename)
        } else {
            self.filename.clone()
        }
    }
}

/// The message sent to every broadcast channel.
#[derive(Debug, Clone, Default)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub file: Option<BroadcastFile>,
}

impl OutgoingMessage {
    /// True when there is neither text nor a file to send.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.file.is_none()
    }
}
