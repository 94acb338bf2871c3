//! Closed set of roles recognised by the access registry.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Kanban administrator; may open tickets and manage member roles.
    Admin,
    /// Kanban member; may open tickets.
    Member,
    /// Reserved role for privileged operations such as mutating an ordered
    /// list store or granting administrator rights.
    Controller,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Member, Self::Controller];

    /// Returns the external role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "KANBAN_ADMIN",
            Self::Member => "KANBAN_MEMBER",
            Self::Controller => "DB_CONTROLLER",
        }
    }

    /// Returns the role whose holders may grant or revoke this role.
    #[must_use]
    pub const fn admin_role(self) -> Self {
        match self {
            Self::Member => Self::Admin,
            Self::Admin | Self::Controller => Self::Controller,
        }
    }

    /// Returns `true` for roles that can only be assigned by the system.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Controller)
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "KANBAN_ADMIN" | "ADMIN" => Ok(Self::Admin),
            "KANBAN_MEMBER" | "MEMBER" => Ok(Self::Member),
            "DB_CONTROLLER" | "CONTROLLER" => Ok(Self::Controller),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
