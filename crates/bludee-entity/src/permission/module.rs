//! Module enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A presentation grouping of capabilities under one menu section.
///
/// Modules are grouping labels only; actual gating is per-capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    /// Distribution module (inventory, processing, dispatch, donors).
    Distribution,
    /// Reception module (requests, reception, compatibility, issuing).
    Reception,
    /// Collaborative hub module.
    Hub,
    /// Platform administration module.
    Admin,
}

impl Module {
    /// Return the module's wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distribution => "distribution",
            Self::Reception => "reception",
            Self::Hub => "hub",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Module {
    type Err = bludee_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distribution" => Ok(Self::Distribution),
            "reception" => Ok(Self::Reception),
            "hub" => Ok(Self::Hub),
            "admin" => Ok(Self::Admin),
            _ => Err(bludee_core::AppError::validation(format!(
                "Unknown module: '{s}'"
            ))),
        }
    }
}
