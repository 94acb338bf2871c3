//! Ordered list store port.

use crate::access::domain::{Address, Role};
use crate::list_store::domain::ListStoreResult;
use async_trait::async_trait;

/// Independently instantiated append-only sequence of `u64` entries.
///
/// Every store instance has exactly one controller, assigned once through
/// [`OrderedListStore::initialize`]. Only the controller may mutate it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderedListStore: Send + Sync {
    /// Assigns the store's controller.
    ///
    /// # Errors
    ///
    /// Returns [`ListStoreError::AlreadyInitialized`] when a controller has
    /// already been assigned.
    ///
    /// [`ListStoreError::AlreadyInitialized`]: crate::list_store::domain::ListStoreError::AlreadyInitialized
    async fn initialize(&self, controller: Address) -> ListStoreResult<()>;

    /// Returns `true` once a controller has been assigned.
    async fn is_initialized(&self) -> ListStoreResult<bool>;

    /// Appends `value` as the new tail, growing the length by exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`ListStoreError::Unauthorized`] when `caller` is not the
    /// controller.
    ///
    /// [`ListStoreError::Unauthorized`]: crate::list_store::domain::ListStoreError::Unauthorized
    async fn push_back(&self, caller: Address, value: u64) -> ListStoreResult<()>;

    /// Drops entries past `length`, undoing appends that were never
    /// committed by the controller's enclosing operation.
    async fn truncate(&self, caller: Address, length: u64) -> ListStoreResult<()>;

    /// Returns an empty store to the uninitialized state.
    ///
    /// # Errors
    ///
    /// Returns an error when `caller` is not the controller or the store
    /// still holds entries.
    async fn release(&self, caller: Address) -> ListStoreResult<()>;

    /// Returns the number of entries.
    async fn size_of(&self) -> ListStoreResult<u64>;

    /// Returns `true` when the store holds at least one entry.
    async fn list_exists(&self) -> ListStoreResult<bool>;

    /// Returns the entry at `index`, if any.
    async fn get(&self, index: u64) -> ListStoreResult<Option<u64>>;

    /// Returns all entries in insertion order.
    async fn entries(&self) -> ListStoreResult<Vec<u64>>;

    /// Returns `true` when `account` holds `role` on this store.
    async fn has_role(&self, role: Role, account: Address) -> ListStoreResult<bool>;
}
