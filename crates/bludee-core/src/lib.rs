//! # bludee-core
//!
//! Core crate for the Bludee blood-bank coordination platform. Contains
//! configuration schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bludee crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
