//! Session entity model.

mod model;

pub use model::Session;
