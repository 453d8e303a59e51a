//! Organization role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the Bludee RBAC system.
///
/// The role set is closed and defined at process start; roles are never
/// created or destroyed at runtime. Each account carries exactly one role,
/// and each role maps to a fixed bundle of modules and capabilities in the
/// role registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full blood bank.
    Bank,
    /// Hospital operating its own complete bank.
    HospitalFullBank,
    /// Hospital that only receives components.
    HospitalReceiver,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// All roles, in registry declaration order.
    pub const ALL: [Role; 4] = [
        Role::Bank,
        Role::HospitalFullBank,
        Role::HospitalReceiver,
        Role::Admin,
    ];

    /// Return the role's wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "BANK",
            Self::HospitalFullBank => "HOSPITAL_FULL_BANK",
            Self::HospitalReceiver => "HOSPITAL_RECEIVER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = bludee_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BANK" => Ok(Self::Bank),
            "HOSPITAL_FULL_BANK" => Ok(Self::HospitalFullBank),
            "HOSPITAL_RECEIVER" => Ok(Self::HospitalReceiver),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(bludee_core::AppError::validation(format!(
                "Unknown role: '{s}'. Expected one of: BANK, HOSPITAL_FULL_BANK, \
                 HOSPITAL_RECEIVER, ADMIN"
            ))),
        }
    }
}
