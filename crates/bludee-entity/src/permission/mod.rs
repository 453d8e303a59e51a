//! Capability and module identifier types.

mod capability;
mod module;

pub use capability::Capability;
pub use module::Module;
