//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential digest scheme.
///
/// The digest algorithm is configuration, not a fixed contract: the seeded
/// demo directory uses unsalted SHA-256, while any real deployment should
/// select Argon2id. Verification dispatches on the stored hash format, so
/// a directory may hold a mix of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordScheme {
    /// Unsalted SHA-256 hex digest. Placeholder strength only.
    Sha256,
    /// Argon2id with a random salt, stored in PHC string format.
    Argon2id,
}

impl Default for PasswordScheme {
    fn default() -> Self {
        Self::Sha256
    }
}

impl std::fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordScheme::Sha256 => write!(f, "sha256"),
            PasswordScheme::Argon2id => write!(f, "argon2id"),
        }
    }
}

/// Authentication and credential configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Digest scheme used when hashing new passwords.
    #[serde(default)]
    pub password_scheme: PasswordScheme,
}
