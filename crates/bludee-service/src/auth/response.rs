//! Login response payloads.

use serde::{Deserialize, Serialize};

use bludee_entity::permission::{Capability, Module};
use bludee_entity::user::Role;

/// Identity payload returned to the client on successful login.
///
/// Field names and the order of `capabilities` and `modules` are part
/// of the client contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
    /// Owning organization.
    pub organization: String,
    /// Contact email address.
    pub email: String,
    /// Token identifying the issued session.
    pub session_token: String,
    /// Full capability set of the role, in contract order.
    pub capabilities: Vec<Capability>,
    /// Full module set of the role, in contract order.
    pub modules: Vec<Module>,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// The authenticated identity and its grants.
    pub user_info: UserInfo,
}
