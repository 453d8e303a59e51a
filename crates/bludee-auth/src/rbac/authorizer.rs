//! Capability checks against live sessions.

use std::sync::Arc;

use bludee_entity::permission::Capability;

use crate::session::SessionStore;

use super::registry::RoleRegistry;

/// Answers "may the holder of this token do X?" for live sessions.
///
/// Designed for high-frequency calls: a check reads the session store
/// once and consults the static role tables. Its only side effect is
/// the store's lazy eviction of a stale entry it happens to observe;
/// a check never extends a session's expiry.
#[derive(Debug, Clone)]
pub struct Authorizer {
    /// Live sessions.
    session_store: Arc<SessionStore>,
    /// Role-to-capability tables.
    registry: RoleRegistry,
}

impl Authorizer {
    /// Creates a new authorizer over the given session store.
    pub fn new(session_store: Arc<SessionStore>) -> Self {
        Self {
            session_store,
            registry: RoleRegistry::new(),
        }
    }

    /// Whether the session identified by `token` grants `capability`.
    ///
    /// An unknown or expired token yields `false` — absence of
    /// permission, not a fault. The role consulted is the one captured
    /// at login time.
    pub fn check_permission(&self, token: &str, capability: Capability) -> bool {
        match self.session_store.find_live(token) {
            Some(session) => self.registry.has_capability(session.role, capability),
            None => false,
        }
    }
}
