//! Menu derivation service.

use std::sync::Arc;

use bludee_auth::rbac::RoleRegistry;
use bludee_auth::session::SessionStore;
use bludee_entity::menu::{MenuItem, MenuSection};
use bludee_entity::user::Role;

use super::catalog::SECTIONS;

/// Derives the navigation menu for a live session's role.
#[derive(Debug, Clone)]
pub struct MenuService {
    /// Live sessions.
    session_store: Arc<SessionStore>,
    /// Role-to-capability tables.
    registry: RoleRegistry,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(session_store: Arc<SessionStore>) -> Self {
        Self {
            session_store,
            registry: RoleRegistry::new(),
        }
    }

    /// Builds the ordered menu for the session identified by `token`.
    ///
    /// An unknown or expired session yields an empty menu, with the
    /// same lazy eviction as permission checks. Sections appear in
    /// catalog order; a section whose module is not granted, or with
    /// no qualifying items, is omitted entirely.
    pub fn build_menu(&self, token: &str) -> Vec<MenuSection> {
        match self.session_store.find_live(token) {
            Some(session) => self.menu_for_role(session.role),
            None => Vec::new(),
        }
    }

    fn menu_for_role(&self, role: Role) -> Vec<MenuSection> {
        let mut menu = Vec::new();

        for spec in SECTIONS {
            if !self.registry.has_module(role, spec.module) {
                continue;
            }

            let items: Vec<MenuItem> = spec
                .items
                .iter()
                .filter(|item| self.registry.has_capability(role, item.capability))
                .map(|item| MenuItem {
                    id: item.capability.as_str().to_string(),
                    name: item.name.to_string(),
                    icon: item.icon.to_string(),
                })
                .collect();

            if !items.is_empty() {
                menu.push(MenuSection {
                    section: spec.module.as_str().to_string(),
                    title: spec.title.to_string(),
                    items,
                });
            }
        }

        menu
    }
}
