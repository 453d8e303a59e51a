//! Authentication failure taxonomy.

use thiserror::Error;

use bludee_core::error::AppError;

/// A failed authentication attempt.
///
/// The three credential failures are distinct outcomes with distinct
/// human-readable messages; the message strings are part of the client
/// contract. Expired or missing sessions are never represented here —
/// they are value results (`false`, empty list, `None`) on the query
/// side, not faults.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account exists for the presented username.
    #[error("Usuario no encontrado")]
    UserNotFound,
    /// The account exists but is deactivated.
    #[error("Usuario desactivado")]
    AccountDisabled,
    /// The presented password does not match the stored credential hash.
    #[error("Contraseña incorrecta")]
    InvalidCredentials,
    /// A collaborator failed (directory lookup, hash parsing).
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl AuthError {
    /// The human-readable outcome message for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserNotFound => AppError::not_found(err.to_string()),
            AuthError::AccountDisabled | AuthError::InvalidCredentials => {
                AppError::authentication(err.to_string())
            }
            AuthError::Internal(inner) => inner,
        }
    }
}
