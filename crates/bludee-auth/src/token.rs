//! Opaque session token generation.

use rand::RngCore;

/// Generates opaque, unguessable session tokens.
///
/// Tokens are 32 bytes from a cryptographically secure generator,
/// hex-encoded. Collision probability is negligible, but the caller
/// still checks the store before inserting so uniqueness is a hard
/// guarantee rather than a probabilistic one.
#[derive(Debug, Clone)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Creates a new token generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a fresh 64-character hex token.
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
