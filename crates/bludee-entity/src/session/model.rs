//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::user::Role;

/// A time-bounded proof of a successful authentication.
///
/// The role and organization are snapshots taken at login time: a later
/// change to the underlying account does not retroactively alter a live
/// session. Expiry is absolute, counted from login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unguessable session token (unique key).
    pub token: String,
    /// Owning username.
    pub username: String,
    /// Role at login time.
    pub role: Role,
    /// Organization at login time.
    pub organization: String,
    /// When the session was created (login time).
    pub login_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Time remaining before expiry, floored at zero.
    pub fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now()).max(Duration::zero())
    }
}
