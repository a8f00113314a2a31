use crate::{bot::Data, error::AppError};

const GENERIC_ERROR_MESSAGE: &str = "An error occurred while running this command.";
const CHECK_FAILED_MESSAGE: &str = "You do not have permission to use this command.";

/// Framework error hook.
///
/// Validation errors are answered with their message. Any other command error is
/// logged and answered with a generic message. Everything else falls through to
/// poise's default handler.
pub async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let reply = match &error {
                AppError::ValidationErr(e) => e.to_string(),
                e => {
                    tracing::error!("Error in command `{}`: {:?}", ctx.command().qualified_name, e);
                    GENERIC_ERROR_MESSAGE.to_string()
                }
            };

            if let Err(e) = ctx.say(reply).await {
                tracing::error!("Failed to report command error: {:?}", e);
            }
        }
        poise::FrameworkError::CommandCheckFailed { error, ctx, .. } => {
            if let Some(e) = error {
                tracing::error!("Staff check failed with error: {:?}", e);
            }

            if let Err(e) = ctx.say(CHECK_FAILED_MESSAGE).await {
                tracing::error!("Failed to report check failure: {:?}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling framework error: {:?}", e);
            }
        }
    }
}
