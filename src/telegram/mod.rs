//! Telegram integration: bot setup, message conversion, keyboards, transport

pub mod bot;
pub mod events;
pub mod handlers;
pub mod keyboard;
pub mod transport;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, wait_for_bot_api, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use transport::TelegramTransport;
pub use teloxide::Bot;
