//! # bludee-auth
//!
//! Credential verification, session management, and role-based access
//! control for the Bludee blood-bank coordination platform.
//!
//! ## Modules
//!
//! - `password` — configurable credential hashing (SHA-256 placeholder, Argon2id)
//! - `token` — opaque session token generation
//! - `session` — in-memory session store with lazy expiry eviction
//! - `rbac` — role registry and capability checks
//! - `directory` — user directory seam and the seeded in-memory table

pub mod directory;
pub mod error;
pub mod password;
pub mod rbac;
pub mod session;
pub mod token;

pub use directory::{InMemoryDirectory, UserDirectory};
pub use error::AuthError;
pub use password::PasswordHasher;
pub use rbac::{Authorizer, RoleRegistry};
pub use session::SessionStore;
pub use token::TokenGenerator;
