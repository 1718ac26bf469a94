//! Handler types and dependencies

use std::sync::Arc;

use crate::conversation::Conversation;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub conversation: Arc<Conversation>,
    pub bot_username: Option<String>,
}

impl HandlerDeps {
    pub fn new(conversation: Arc<Conversation>, bot_username: Option<String>) -> Self {
        Self {
            conversation,
            bot_username,
        }
    }
}
