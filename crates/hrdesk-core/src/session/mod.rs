//! Per-session confirmation memory.
//!
//! Each session remembers at most one suggested-but-unconfirmed FAQ entry.
//! A new suggestion silently overwrites the previous one (last-suggested
//! wins), and consuming a confirmation is an atomic take, so a "yes" can
//! never be redeemed twice by concurrent requests in the same session.


use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

use crate::constants::{AFFIRMATIVE_TOKENS, SESSION_MAX_CAPACITY, SESSION_TTL_SECS};

/// A suggestion offered to a session, awaiting yes/no confirmation.
///
/// References the corpus entry by index; question strings are never used
/// as a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSuggestion {
    pub entry_index: usize,
}

impl PendingSuggestion {
    pub fn new(entry_index: usize) -> Self {
        Self { entry_index }
    }
}

/// Session id → pending suggestion, with TTL expiry for abandoned sessions.
///
/// Session identifiers are opaque strings supplied by the caller; the store
/// never generates them.
pub struct SessionStore {
    pending: Cache<String, PendingSuggestion>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("entries", &self.pending.entry_count())
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a store with the default TTL and capacity.
    pub fn new() -> Self {
        Self::with_ttl(
            Duration::from_secs(SESSION_TTL_SECS),
            SESSION_MAX_CAPACITY,
        )
    }

    /// Creates a store with an explicit TTL and max session capacity.
    pub fn with_ttl(ttl: Duration, capacity: u64) -> Self {
        Self {
            pending: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Records a suggestion for the session, replacing any previous one.
    pub fn record_suggestion(&self, session_id: &str, suggestion: PendingSuggestion) {
        debug!(
            session_id = session_id,
            entry_index = suggestion.entry_index,
            "Recording pending suggestion"
        );
        self.pending.insert(session_id.to_string(), suggestion);
    }

    /// Takes the pending suggestion for the session, if any.
    ///
    /// A session with no pending suggestion returns `None`; that is not an
    /// error.
    pub fn consume_confirmation(&self, session_id: &str) -> Option<PendingSuggestion> {
        self.pending.remove(session_id)
    }

    /// Returns the pending suggestion without consuming it.
    pub fn pending(&self, session_id: &str) -> Option<PendingSuggestion> {
        self.pending.get(session_id)
    }

    /// Drops the session's pending suggestion, if any.
    pub fn clear(&self, session_id: &str) {
        self.pending.invalidate(session_id);
    }
}

/// Returns `true` when the query, trimmed and lower-cased, is one of the
/// fixed affirmative tokens.
pub fn is_affirmative(query: &str) -> bool {
    let normalized = query.trim().to_lowercase();
    AFFIRMATIVE_TOKENS.contains(&normalized.as_str())
}
