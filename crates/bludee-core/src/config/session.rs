//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Absolute session lifetime in hours, counted from login.
    ///
    /// Expiry is absolute, not sliding: permission checks never extend it.
    /// The client contract fixes the default at 8 hours.
    #[serde(default = "default_lifetime_hours")]
    pub lifetime_hours: u64,
}

impl SessionConfig {
    /// The configured lifetime as a [`chrono::Duration`].
    pub fn lifetime(&self) -> chrono::Duration {
        chrono::Duration::hours(self.lifetime_hours as i64)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_hours: default_lifetime_hours(),
        }
    }
}

fn default_lifetime_hours() -> u64 {
    8
}
