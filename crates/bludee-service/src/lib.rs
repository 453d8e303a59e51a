//! # bludee-service
//!
//! Business logic service layer for Bludee. Each service orchestrates
//! the user directory, session store, and role registry to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod menu;

pub use auth::{AuthService, LoginResponse, UserInfo};
pub use menu::MenuService;
