//! Configurable password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use sha2::{Digest, Sha256};

use bludee_core::config::auth::PasswordScheme;
use bludee_core::error::AppError;

/// Handles password hashing and verification.
///
/// The digest scheme is configuration, not contract: the seeded demo
/// directory uses an unsalted SHA-256 placeholder, while Argon2id is the
/// scheme any real deployment should select. Verification dispatches on
/// the stored hash format, so a directory may hold a mix of both while
/// accounts migrate.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Scheme applied when hashing new passwords.
    scheme: PasswordScheme,
}

impl PasswordHasher {
    /// Creates a new password hasher using the given scheme for new hashes.
    pub fn new(scheme: PasswordScheme) -> Self {
        Self { scheme }
    }

    /// Hashes a plaintext password using the configured scheme.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        match self.scheme {
            PasswordScheme::Sha256 => Ok(sha256_hex(password)),
            PasswordScheme::Argon2id => {
                let salt = SaltString::generate(&mut OsRng);
                let argon2 = Argon2::default();

                let hash = argon2
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

                Ok(hash.to_string())
            }
        }
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// PHC-format hashes (`$argon2...`) are verified with Argon2id;
    /// anything else is treated as a SHA-256 hex digest.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        if stored_hash.starts_with("$argon2") {
            let parsed_hash = PasswordHash::new(stored_hash)
                .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

            let argon2 = Argon2::default();
            match argon2.verify_password(password.as_bytes(), &parsed_hash) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(AppError::internal(format!(
                    "Password verification failed: {e}"
                ))),
            }
        } else {
            Ok(sha256_hex(password) == stored_hash)
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(PasswordScheme::default())
    }
}

/// Computes the SHA-256 digest of the input and returns it hex-encoded.
fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
