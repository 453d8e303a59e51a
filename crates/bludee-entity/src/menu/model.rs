//! Navigation menu value objects.
//!
//! Menus are derived from a role on demand, never stored. The structure
//! and ordering are a data contract consumed by client UIs; nothing here
//! renders anything.

use serde::{Deserialize, Serialize};

/// One entry in a menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable item identifier (the capability's wire string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display icon.
    pub icon: String,
}

/// One section of the navigation menu.
///
/// Sections with zero qualifying items are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section key (the module's wire string).
    pub section: String,
    /// Section title.
    pub title: String,
    /// Ordered items the role qualifies for.
    pub items: Vec<MenuItem>,
}
