//! Relaybot - Telegram bot that relays user messages to a fixed set of channels
//!
//! Users move through a small menu. Media submission is unlocked by sharing a
//! phone number; everything submitted is forwarded to every configured
//! destination channel.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `storage`: per-user verification flags and conversation states
//! - `conversation`: state machine, prompts and forwarding relay (no Telegram)
//! - `telegram`: teloxide adapter and dispatcher schema

pub mod cli;
pub mod conversation;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use conversation::{Conversation, InboundEvent, Transport};
pub use crate::core::{config, AppError, AppResult};
pub use storage::{MemorySessionStore, SessionStore};
