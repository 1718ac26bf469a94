use dashmap::DashMap;

use crate::conversation::types::UserId;

/// Per-user verification flags.
///
/// Absent users are unverified. Entries are created on first write and live
/// for the process lifetime; a restart forgets everyone.
#[derive(Debug, Default)]
pub struct VerificationStore {
    verified: DashMap<UserId, bool>,
}

impl VerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` for users never written.
    pub fn is_verified(&self, user: UserId) -> bool {
        self.verified.get(&user).map(|entry| *entry).unwrap_or(false)
    }

    /// Unconditional overwrite. Every call is audit-logged.
    pub fn set_verified(&self, user: UserId, verified: bool) {
        let previous = self.verified.insert(user, verified).unwrap_or(false);
        log::info!("Verification for user {}: {} -> {}", user, previous, verified);
    }

    pub fn len(&self) -> usize {
        self.verified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verified.is_empty()
    }
}
