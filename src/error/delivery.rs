use serenity::http::HttpError;
use thiserror::Error;

/// Failure to deliver to a single broadcast target.
///
/// Delivery errors are logged with full detail where they occur and then reduced to
/// a short label in the broadcast report. They never abort a broadcast.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Discord rejected the request with 403, e.g. the user has DMs disabled.
    #[error("Discord refused the request (403 Forbidden)")]
    Forbidden,

    /// The channel or user does not exist or is not visible to the bot.
    #[error("Discord could not find the requested target (404 Not Found)")]
    NotFound,

    /// The raw identifier is not a valid Discord snowflake.
    #[error("'{0}' is not a valid Discord ID")]
    InvalidId(String),

    /// Any other Discord API or gateway error.
    #[error(transparent)]
    Discord(Box<serenity::Error>),

    /// Attachment download failed.
    #[error("Failed to download attachment: {0}")]
    Download(#[from] reqwest::Error),
}

/// Classifies Serenity errors by the HTTP status Discord answered with.
///
/// 403 and 404 get their own variants so callers can label them distinctly; every
/// other error is boxed as-is.
impl From<serenity::Error> for DeliveryError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            match response.status_code.as_u16() {
                403 => return DeliveryError::Forbidden,
                404 => return DeliveryError::NotFound,
                _ => {}
            }
        }

        DeliveryError::Discord(Box::new(err))
    }
}
