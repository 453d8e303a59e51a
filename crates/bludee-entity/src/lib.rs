//! # bludee-entity
//!
//! Domain entity models for Bludee. Every struct in this crate represents
//! a directory record or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`. Role, capability,
//! and module identifiers are closed enums whose wire strings are part
//! of the client contract.

pub mod menu;
pub mod permission;
pub mod session;
pub mod user;
