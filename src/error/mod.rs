//! Error types for the broadcast bot.
//!
//! `AppError` is the top-level error returned by services and command handlers. It
//! wraps the domain-specific errors below and the errors of the crates the bot talks
//! to. Per-target delivery problems never reach `AppError`: they are captured as
//! `DeliveryError` values and folded into a broadcast report instead.

pub mod config;
pub mod delivery;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, validation::ValidationError};

/// Top-level application error type.
///
/// Validation errors carry a user-facing message and are answered directly by the
/// command handlers. Every other variant ends the invocation and is logged by the
/// framework error hook, which replies with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Input or precondition failure, reported to the invoker before any send.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep `AppError` small, as serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
