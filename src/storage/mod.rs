//! Per-user session storage
//!
//! The conversation core only sees the [`SessionStore`] trait. The in-memory
//! implementation keeps nothing across restarts: after a restart every user is
//! unverified with no session.

pub mod session;
pub mod verification;

pub use session::ConversationSessions;
pub use verification::VerificationStore;

use crate::conversation::types::{ConversationState, UserId};

/// Verification flags and conversation states, keyed by user.
///
/// Implementations must be safe to call from many tasks at once; writes for
/// one user must never be visible as partial writes for another.
pub trait SessionStore: Send + Sync {
    /// `false` for unknown users.
    fn is_verified(&self, user: UserId) -> bool;

    fn set_verified(&self, user: UserId, verified: bool);

    /// `None` until the user's session has started.
    fn state(&self, user: UserId) -> Option<ConversationState>;

    fn set_state(&self, user: UserId, state: ConversationState);
}

/// Process-lifetime store backed by two concurrent maps.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    verification: VerificationStore,
    sessions: ConversationSessions,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verification(&self) -> &VerificationStore {
        &self.verification
    }

    pub fn sessions(&self) -> &ConversationSessions {
        &self.sessions
    }
}

impl SessionStore for MemorySessionStore {
    fn is_verified(&self, user: UserId) -> bool {
        self.verification.is_verified(user)
    }

    fn set_verified(&self, user: UserId, verified: bool) {
        self.verification.set_verified(user, verified);
    }

    fn state(&self, user: UserId) -> Option<ConversationState> {
        self.sessions.get(user)
    }

    fn set_state(&self, user: UserId, state: ConversationState) {
        self.sessions.set(user, state);
    }
}
