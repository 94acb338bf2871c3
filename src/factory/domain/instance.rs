//! Instance handles and address derivation.

use crate::access::domain::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Kind of component a template or instance implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceKind {
    /// An [`OrderedListStore`](crate::list_store::ports::OrderedListStore).
    ListStore,
    /// An [`IdentityMinter`](crate::identity::ports::IdentityMinter).
    IdentityMinter,
}

impl InstanceKind {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListStore => "list_store",
            Self::IdentityMinter => "identity_minter",
        }
    }
}

impl fmt::Display for InstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An addressable instance and the handle used to reach it.
pub struct Instance<T: ?Sized> {
    address: Address,
    handle: Arc<T>,
}

impl<T: ?Sized> Instance<T> {
    /// Pairs an address with its handle.
    #[must_use]
    pub const fn new(address: Address, handle: Arc<T>) -> Self {
        Self { address, handle }
    }

    /// Returns the instance address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the instance handle.
    #[must_use]
    pub const fn handle(&self) -> &Arc<T> {
        &self.handle
    }

    /// Splits the instance into address and handle.
    #[must_use]
    pub fn into_parts(self) -> (Address, Arc<T>) {
        (self.address, self.handle)
    }
}

impl<T: ?Sized> Clone for Instance<T> {
    fn clone(&self) -> Self {
        Self {
            address: self.address,
            handle: Arc::clone(&self.handle),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Instance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Derives the address of the `nonce`-th instance created by `deployer`.
///
/// The same deployer and nonce always produce the same address, and every
/// nonce produces a distinct one.
#[must_use]
pub fn clone_address(deployer: Address, nonce: u64) -> Address {
    Address::derive(format!("{deployer}:{nonce}").as_bytes())
}
