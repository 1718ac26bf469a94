use dashmap::DashMap;

use crate::conversation::types::{ConversationState, UserId};

/// Current conversation state per user. No entry means "not started".
#[derive(Debug, Default)]
pub struct ConversationSessions {
    states: DashMap<UserId, ConversationState>,
}

impl ConversationSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user: UserId) -> Option<ConversationState> {
        self.states.get(&user).map(|entry| *entry)
    }

    pub fn set(&self, user: UserId, state: ConversationState) {
        self.states.insert(user, state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
