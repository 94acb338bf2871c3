//! Instance factory port.

use crate::access::domain::Address;
use crate::factory::domain::{FactoryResult, Instance};
use crate::identity::ports::IdentityMinter;
use crate::list_store::ports::OrderedListStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Produces independent instances from templates and resolves deployed
/// instances by address.
#[async_trait]
pub trait InstanceFactory: Send + Sync {
    /// Clones the list store template at `template` into a fresh, empty,
    /// uninitialized store.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnknownTemplate`] or
    /// [`FactoryError::WrongKind`] when `template` does not name a list store
    /// template, or [`FactoryError::NonceExhausted`] when no address is left
    /// to assign.
    ///
    /// [`FactoryError::UnknownTemplate`]: crate::factory::domain::FactoryError::UnknownTemplate
    /// [`FactoryError::WrongKind`]: crate::factory::domain::FactoryError::WrongKind
    /// [`FactoryError::NonceExhausted`]: crate::factory::domain::FactoryError::NonceExhausted
    async fn clone_list_store(
        &self,
        template: Address,
    ) -> FactoryResult<Instance<dyn OrderedListStore>>;

    /// Clones the identity minter template at `template` into a fresh,
    /// uninitialized minter.
    ///
    /// # Errors
    ///
    /// Returns an error when `template` does not name an identity minter
    /// template, or [`FactoryError::NonceExhausted`] when no address is left
    /// to assign.
    ///
    /// [`FactoryError::NonceExhausted`]: crate::factory::domain::FactoryError::NonceExhausted
    async fn clone_identity_minter(
        &self,
        template: Address,
    ) -> FactoryResult<Instance<dyn IdentityMinter>>;

    /// Resolves the list store deployed at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnknownInstance`] when nothing is deployed
    /// there.
    ///
    /// [`FactoryError::UnknownInstance`]: crate::factory::domain::FactoryError::UnknownInstance
    async fn list_store_at(&self, address: Address) -> FactoryResult<Arc<dyn OrderedListStore>>;

    /// Resolves the identity minter deployed at `address`.
    ///
    /// # Errors
    ///
    /// Returns an error when no identity minter is deployed there.
    async fn identity_minter_at(&self, address: Address) -> FactoryResult<Arc<dyn IdentityMinter>>;
}
