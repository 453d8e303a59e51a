//! Authentication and session lifecycle use cases.

pub mod response;
pub mod service;

pub use response::{LoginResponse, UserInfo};
pub use service::AuthService;
