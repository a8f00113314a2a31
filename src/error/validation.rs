use thiserror::Error;

/// Conditions that stop a command before any message is sent.
///
/// The `Display` text of each variant is shown to the invoker as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("You must provide a message when selecting 'Text Only' mode.")]
    MissingMessage,

    #[error("You must provide an image when selecting 'Image Only' mode.")]
    MissingImage,

    #[error("You must provide a message or image when selecting 'Text and Image' mode.")]
    MissingContent,

    #[error("No ball spawn channels are currently configured.")]
    NoChannelsConfigured,

    #[error("Please provide at least one user ID.")]
    NoUserIds,
}
