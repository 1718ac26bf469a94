use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

use crate::core::error::{AppError, AppResult};

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: relaybot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "relaybot.log".to_string()));

/// Custom Bot API server URL (local Bot API server, test server)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Channels every relayed message is forwarded to, in delivery order.
///
/// Either a numeric chat id (`-100…` for channels) or a public `@username`.
/// The bot must be a member of each channel with permission to post.
pub const DESTINATION_CHANNELS: &[&str] = &[
    "-1001987654321",
    "-1002045813370",
    "@relay_submissions",
    "@relay_archive",
];

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
///
/// Returns `AppError::MissingToken` when neither is set or the value is blank.
/// Nothing else may start before this succeeds.
pub fn bot_token() -> AppResult<SecretString> {
    token_from(env::var("BOT_TOKEN").ok().or_else(|| env::var("TELOXIDE_TOKEN").ok()))
}

fn token_from(raw: Option<String>) -> AppResult<SecretString> {
    match raw {
        Some(token) if !token.trim().is_empty() => Ok(SecretString::from(token.trim().to_string())),
        _ => Err(AppError::MissingToken),
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Retry configuration
pub mod retry {
    use super::Duration;

    /// Maximum number of `get_me` probes while the Bot API is coming up
    pub const STARTUP_MAX_ATTEMPTS: u32 = 12;

    /// Delay between startup probes (in seconds)
    pub const STARTUP_RETRY_DELAY_SECS: u64 = 5;

    /// Startup probe delay duration
    pub fn startup_delay() -> Duration {
        Duration::from_secs(STARTUP_RETRY_DELAY_SECS)
    }
}
