//! Role-to-capability mapping definitions.

use bludee_entity::permission::{Capability, Module};
use bludee_entity::user::Role;

const BANK_MODULES: &[Module] = &[Module::Distribution, Module::Hub, Module::Reception];

const BANK_CAPABILITIES: &[Capability] = &[
    Capability::Inventory,
    Capability::Processing,
    Capability::Dispatch,
    Capability::Donors,
    Capability::HubSearch,
    Capability::HubShare,
    Capability::Transfers,
    Capability::Requests,
    Capability::Reception,
    Capability::Compatibility,
    Capability::Issuing,
];

const HOSPITAL_FULL_BANK_MODULES: &[Module] =
    &[Module::Distribution, Module::Reception, Module::Hub];

const HOSPITAL_FULL_BANK_CAPABILITIES: &[Capability] = &[
    Capability::Inventory,
    Capability::Processing,
    Capability::Dispatch,
    Capability::Donors,
    Capability::Requests,
    Capability::Reception,
    Capability::Compatibility,
    Capability::Issuing,
    Capability::HubSearch,
    Capability::Transfers,
];

const HOSPITAL_RECEIVER_MODULES: &[Module] = &[Module::Reception, Module::Hub];

const HOSPITAL_RECEIVER_CAPABILITIES: &[Capability] = &[
    Capability::Requests,
    Capability::Reception,
    Capability::Compatibility,
    Capability::Issuing,
    Capability::HubSearch,
];

const ADMIN_MODULES: &[Module] = &[
    Module::Admin,
    Module::Distribution,
    Module::Reception,
    Module::Hub,
];

const ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::Users,
    Capability::Audit,
    Capability::Alerts,
    Capability::Inventory,
    Capability::Processing,
    Capability::Dispatch,
    Capability::Requests,
    Capability::Reception,
    Capability::HubSearch,
    Capability::HubShare,
    Capability::Transfers,
];

/// Static registry mapping each role to its display name, modules, and
/// capabilities.
///
/// The tables are fixed at compile time; roles are never created or
/// modified at runtime. Module and capability lists are ordered as the
/// client contract enumerates them.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry;

impl RoleRegistry {
    /// Creates a new registry over the built-in role tables.
    pub fn new() -> Self {
        Self
    }

    /// Human-readable display name for the role.
    pub fn display_name(&self, role: Role) -> &'static str {
        match role {
            Role::Bank => "Banco de Sangre",
            Role::HospitalFullBank => "Hospital Completo",
            Role::HospitalReceiver => "Hospital Receptor",
            Role::Admin => "Administrador",
        }
    }

    /// Modules enabled for the role, in contract order.
    pub fn modules(&self, role: Role) -> &'static [Module] {
        match role {
            Role::Bank => BANK_MODULES,
            Role::HospitalFullBank => HOSPITAL_FULL_BANK_MODULES,
            Role::HospitalReceiver => HOSPITAL_RECEIVER_MODULES,
            Role::Admin => ADMIN_MODULES,
        }
    }

    /// Capabilities granted to the role, in contract order.
    pub fn capabilities(&self, role: Role) -> &'static [Capability] {
        match role {
            Role::Bank => BANK_CAPABILITIES,
            Role::HospitalFullBank => HOSPITAL_FULL_BANK_CAPABILITIES,
            Role::HospitalReceiver => HOSPITAL_RECEIVER_CAPABILITIES,
            Role::Admin => ADMIN_CAPABILITIES,
        }
    }

    /// Whether the role grants the given capability.
    pub fn has_capability(&self, role: Role, capability: Capability) -> bool {
        self.capabilities(role).contains(&capability)
    }

    /// Whether the role's menu includes the given module.
    pub fn has_module(&self, role: Role, module: Module) -> bool {
        self.modules(role).contains(&module)
    }
}
