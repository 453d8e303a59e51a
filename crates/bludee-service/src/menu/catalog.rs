//! Fixed menu section and item catalog.
//!
//! The section order and per-section candidate item lists are a data
//! contract: client UIs depend on this exact ordering.

use bludee_entity::permission::{Capability, Module};

/// A candidate menu item, included iff its capability is granted.
#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    /// Capability gating the item.
    pub capability: Capability,
    /// Display name.
    pub name: &'static str,
    /// Display icon.
    pub icon: &'static str,
}

/// A candidate menu section, included iff its module is granted and at
/// least one item qualifies.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Module gating the section.
    pub module: Module,
    /// Section title.
    pub title: &'static str,
    /// Ordered candidate items.
    pub items: &'static [ItemSpec],
}

/// All menu sections, in presentation order.
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        module: Module::Distribution,
        title: "🏥 Módulo Distribución",
        items: &[
            ItemSpec {
                capability: Capability::Inventory,
                name: "Inventario",
                icon: "📦",
            },
            ItemSpec {
                capability: Capability::Processing,
                name: "Procesamiento",
                icon: "⚗️",
            },
            ItemSpec {
                capability: Capability::Dispatch,
                name: "Despacho",
                icon: "🚚",
            },
            ItemSpec {
                capability: Capability::Donors,
                name: "Donantes",
                icon: "👥",
            },
        ],
    },
    SectionSpec {
        module: Module::Reception,
        title: "🏥 Módulo Recepción",
        items: &[
            ItemSpec {
                capability: Capability::Requests,
                name: "Solicitudes",
                icon: "📋",
            },
            ItemSpec {
                capability: Capability::Reception,
                name: "Recepción",
                icon: "📥",
            },
            ItemSpec {
                capability: Capability::Compatibility,
                name: "Compatibilidad",
                icon: "🧬",
            },
            ItemSpec {
                capability: Capability::Issuing,
                name: "Emisión",
                icon: "💉",
            },
        ],
    },
    SectionSpec {
        module: Module::Hub,
        title: "🌐 Hub Colaborativo",
        items: &[
            ItemSpec {
                capability: Capability::HubSearch,
                name: "Buscar Componentes",
                icon: "🔍",
            },
            ItemSpec {
                capability: Capability::HubShare,
                name: "Compartir Inventario",
                icon: "📤",
            },
            ItemSpec {
                capability: Capability::Transfers,
                name: "Transferencias",
                icon: "🔄",
            },
        ],
    },
    SectionSpec {
        module: Module::Admin,
        title: "⚙️ Administración",
        items: &[
            ItemSpec {
                capability: Capability::Users,
                name: "Usuarios",
                icon: "👤",
            },
            ItemSpec {
                capability: Capability::Audit,
                name: "Auditoría",
                icon: "📊",
            },
            ItemSpec {
                capability: Capability::Alerts,
                name: "Alertas",
                icon: "⚠️",
            },
        ],
    },
];
