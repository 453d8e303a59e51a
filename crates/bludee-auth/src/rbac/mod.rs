//! Role-based access control: the role registry and the session authorizer.

pub mod authorizer;
pub mod registry;

pub use authorizer::Authorizer;
pub use registry::RoleRegistry;
