//! User account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A registered user account in the Bludee directory.
///
/// Accounts are seeded at startup in this core; in a real deployment they
/// are created and deactivated by an external admin workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Credential hash (hex digest or PHC string, depending on scheme).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Assigned role (exactly one).
    pub role: Role,
    /// Owning organization.
    pub organization: String,
    /// Contact email address.
    pub email: String,
    /// Whether the account may log in.
    pub active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time. Updated on each successful authentication.
    pub last_login_at: Option<DateTime<Utc>>,
}
