//! User directory seam and the seeded in-memory implementation.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use bludee_core::error::AppError;
use bludee_entity::user::UserAccount;

pub use memory::InMemoryDirectory;

/// Abstracts user account lookup and login bookkeeping.
///
/// This is the seam where production storage replaces the in-memory
/// table; the authentication core needs only these two operations.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up an account by username.
    async fn find_account(&self, username: &str) -> Result<Option<UserAccount>, AppError>;

    /// Records a successful login against an existing account.
    ///
    /// Fails with a not-found error if no such account exists.
    async fn record_login(&self, username: &str, at: DateTime<Utc>) -> Result<(), AppError>;
}
