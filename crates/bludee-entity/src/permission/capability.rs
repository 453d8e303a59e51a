//! Capability enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single named permission gating access to one feature.
///
/// Capabilities are the actual access boundary; modules only group them
/// for presentation. A capability may be granted under multiple roles.
/// The kebab-case wire strings are part of the client contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Component inventory management.
    Inventory,
    /// Component processing.
    Processing,
    /// Outbound dispatch.
    Dispatch,
    /// Donor management.
    Donors,
    /// Search components across the hub.
    HubSearch,
    /// Publish inventory to the hub.
    HubShare,
    /// Inter-organization transfers.
    Transfers,
    /// Incoming component requests.
    Requests,
    /// Component reception.
    Reception,
    /// Compatibility testing.
    Compatibility,
    /// Component issuing.
    Issuing,
    /// Platform user administration.
    Users,
    /// Audit trail access.
    Audit,
    /// Platform alert management.
    Alerts,
}

impl Capability {
    /// Return the capability's wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Processing => "processing",
            Self::Dispatch => "dispatch",
            Self::Donors => "donors",
            Self::HubSearch => "hub-search",
            Self::HubShare => "hub-share",
            Self::Transfers => "transfers",
            Self::Requests => "requests",
            Self::Reception => "reception",
            Self::Compatibility => "compatibility",
            Self::Issuing => "issuing",
            Self::Users => "users",
            Self::Audit => "audit",
            Self::Alerts => "alerts",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = bludee_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(Self::Inventory),
            "processing" => Ok(Self::Processing),
            "dispatch" => Ok(Self::Dispatch),
            "donors" => Ok(Self::Donors),
            "hub-search" => Ok(Self::HubSearch),
            "hub-share" => Ok(Self::HubShare),
            "transfers" => Ok(Self::Transfers),
            "requests" => Ok(Self::Requests),
            "reception" => Ok(Self::Reception),
            "compatibility" => Ok(Self::Compatibility),
            "issuing" => Ok(Self::Issuing),
            "users" => Ok(Self::Users),
            "audit" => Ok(Self::Audit),
            "alerts" => Ok(Self::Alerts),
            _ => Err(bludee_core::AppError::validation(format!(
                "Unknown capability: '{s}'"
            ))),
        }
    }
}
