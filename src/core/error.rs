use thiserror::Error;

/// Centralized error types for the application
///
/// Uses `thiserror` for automatic error conversion and display formatting.
/// Only `MissingToken` and `InvalidDestination` are fatal, and only at startup;
/// everything raised while serving an update is logged and swallowed.
///
/// # Example
///
/// ```no_run
/// use relaybot::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Bot token is not configured
    #[error("BOT_TOKEN environment variable not set")]
    MissingToken,

    /// Destination channel identifier that is neither a chat id nor an @username
    #[error("Invalid destination channel: {0:?}")]
    InvalidDestination(String),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Transport failures that did not come from the Bot API client
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
