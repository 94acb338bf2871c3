//! Error types for access control and identity parsing.

use super::{Address, Role};
use thiserror::Error;

/// Errors returned by role-gated operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The account does not hold the role required for the operation.
    #[error("account {account} is missing role {role}")]
    Unauthorized {
        /// Account that attempted the operation.
        account: Address,
        /// Role the operation requires.
        role: Role,
    },
}

/// Error returned while parsing an address from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid address '{0}', expected 0x followed by 40 hex digits")]
pub struct ParseAddressError(pub String);

/// Error returned while parsing a role from its external name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
