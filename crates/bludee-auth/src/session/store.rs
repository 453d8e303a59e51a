//! In-memory session store.

use dashmap::DashMap;
use tracing::debug;

use bludee_entity::session::Session;

/// Token-keyed store of live sessions.
///
/// Expired sessions are evicted lazily: a lookup that observes a stale
/// entry removes it and reports the token as absent. There is no
/// background sweep. Lookups never extend a session's expiry.
#[derive(Debug, Default)]
pub struct SessionStore {
    /// Active sessions, keyed by token.
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Inserts a session, keyed by its token.
    pub fn insert(&self, session: Session) {
        self.sessions.insert(session.token.clone(), session);
    }

    /// Returns whether a token currently occupies a slot in the store.
    ///
    /// This is a raw presence check: it does not evict and will report
    /// `true` for an expired-but-not-yet-observed entry. Used to
    /// guarantee token uniqueness at insertion time.
    pub fn contains(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    /// Looks up a live session, evicting it if expired.
    ///
    /// Returns `None` both for unknown tokens and for sessions whose
    /// expiry has passed; the latter are removed as a side effect.
    pub fn find_live(&self, token: &str) -> Option<Session> {
        match self.sessions.get(token) {
            Some(session) if !session.is_expired() => return Some(session.value().clone()),
            Some(_) => {}
            None => return None,
        }

        // The read guard is dropped before removal.
        if let Some((_, session)) = self.sessions.remove(token) {
            debug!(
                username = %session.username,
                expired_at = %session.expires_at,
                "Evicted expired session"
            );
        }
        None
    }

    /// Removes a session, returning whether one was present.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Number of stored sessions, including not-yet-evicted stale ones.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
