//! Domain model for accounts, roles, and role membership.

mod address;
mod error;
mod registry;
mod role;

pub use address::Address;
pub use error::{AccessError, ParseAddressError, ParseRoleError};
pub use registry::AccessControlRegistry;
pub use role::Role;
