//! Session storage with lazy expiry eviction.

pub mod store;

pub use store::SessionStore;
