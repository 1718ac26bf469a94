//! The message transport the conversation core talks to.
//!
//! The Telegram implementation lives in `crate::telegram::transport`; tests
//! plug in recording mocks.

use async_trait::async_trait;

use super::presentation::{Affordance, Prompt};
use super::types::{ChatRef, DestinationId, MessageRef};
use crate::core::error::AppResult;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `text` to `chat` with the given keyboard.
    async fn send_text(&self, chat: ChatRef, text: &str, affordance: Affordance) -> AppResult<()>;

    /// Forward the referenced message to one destination channel.
    async fn forward_message(&self, source: MessageRef, destination: &DestinationId) -> AppResult<()>;

    async fn send_prompt(&self, chat: ChatRef, prompt: &Prompt) -> AppResult<()> {
        self.send_text(chat, &prompt.text, prompt.affordance).await
    }
}
