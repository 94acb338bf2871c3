//! In-memory instance factory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use tracing::debug;

use crate::access::domain::Address;
use crate::factory::{
    domain::{FactoryError, FactoryResult, Instance, InstanceKind, clone_address},
    ports::InstanceFactory,
};
use crate::identity::{adapters::memory::InMemoryIdentityMinter, ports::IdentityMinter};
use crate::list_store::{adapters::memory::InMemoryListStore, ports::OrderedListStore};

/// Thread-safe factory that clones templates into in-memory instances.
///
/// Templates and instances share one address space. Every registration,
/// deployment, or clone consumes a nonce, and the resulting address is
/// derived from the factory's own address and that nonce.
///
/// # Examples
///
/// ```
/// use kanban_ledger::factory::adapters::memory::InMemoryInstanceFactory;
/// use kanban_ledger::factory::ports::InstanceFactory;
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let factory = InMemoryInstanceFactory::new();
/// let template = factory.register_list_store_template().expect("template");
/// let first = factory.clone_list_store(template).await.expect("clone");
/// let second = factory.clone_list_store(template).await.expect("clone");
/// assert_ne!(first.address(), second.address());
/// # });
/// ```
#[derive(Clone)]
pub struct InMemoryInstanceFactory {
    address: Address,
    state: Arc<RwLock<FactoryState>>,
}

#[derive(Default)]
struct FactoryState {
    nonce: u64,
    templates: HashMap<Address, InstanceKind>,
    list_stores: HashMap<Address, Arc<dyn OrderedListStore>>,
    identity_minters: HashMap<Address, Arc<dyn IdentityMinter>>,
}

impl FactoryState {
    fn next_address(&mut self, deployer: Address) -> FactoryResult<Address> {
        let next = self
            .nonce
            .checked_add(1)
            .ok_or(FactoryError::NonceExhausted)?;
        let address = clone_address(deployer, self.nonce);
        self.nonce = next;
        Ok(address)
    }

    fn kind_at(&self, address: Address) -> Option<InstanceKind> {
        if let Some(kind) = self.templates.get(&address) {
            return Some(*kind);
        }
        if self.list_stores.contains_key(&address) {
            return Some(InstanceKind::ListStore);
        }
        if self.identity_minters.contains_key(&address) {
            return Some(InstanceKind::IdentityMinter);
        }
        None
    }

    fn require_template(&self, address: Address, expected: InstanceKind) -> FactoryResult<()> {
        match self.templates.get(&address) {
            Some(found) if *found == expected => Ok(()),
            Some(found) => Err(FactoryError::WrongKind {
                address,
                expected,
                found: *found,
            }),
            None => Err(FactoryError::UnknownTemplate(address)),
        }
    }

    fn missing_instance(&self, address: Address, expected: InstanceKind) -> FactoryError {
        match self.kind_at(address) {
            Some(found) if found != expected => FactoryError::WrongKind {
                address,
                expected,
                found,
            },
            _ => FactoryError::UnknownInstance(address),
        }
    }
}

impl InMemoryInstanceFactory {
    /// Creates an empty factory with a fixed deployer address.
    #[must_use]
    pub fn new() -> Self {
        Self::with_address(Address::derive(b"in-memory-instance-factory"))
    }

    /// Creates an empty factory whose derived addresses are rooted at
    /// `address`.
    #[must_use]
    pub fn with_address(address: Address) -> Self {
        Self {
            address,
            state: Arc::new(RwLock::new(FactoryState::default())),
        }
    }

    /// Registers a list store template and returns its address.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Persistence`] when the state lock is poisoned,
    /// or [`FactoryError::NonceExhausted`] once every address is issued.
    pub fn register_list_store_template(&self) -> FactoryResult<Address> {
        self.register_template(InstanceKind::ListStore)
    }

    /// Registers an identity minter template and returns its address.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Persistence`] when the state lock is poisoned,
    /// or [`FactoryError::NonceExhausted`] once every address is issued.
    pub fn register_identity_minter_template(&self) -> FactoryResult<Address> {
        self.register_template(InstanceKind::IdentityMinter)
    }

    /// Deploys a standalone, uninitialized list store.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Persistence`] when the state lock is poisoned,
    /// or [`FactoryError::NonceExhausted`] once every address is issued.
    pub fn deploy_list_store(&self) -> FactoryResult<Address> {
        self.install_list_store(Arc::new(InMemoryListStore::new()))
    }

    /// Deploys a standalone, uninitialized identity minter.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Persistence`] when the state lock is poisoned,
    /// or [`FactoryError::NonceExhausted`] once every address is issued.
    pub fn deploy_identity_minter(&self) -> FactoryResult<Address> {
        self.install_identity_minter(Arc::new(InMemoryIdentityMinter::new()))
    }

    /// Makes an externally constructed list store resolvable by address.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Persistence`] when the state lock is poisoned,
    /// or [`FactoryError::NonceExhausted`] once every address is issued.
    pub fn install_list_store(&self, store: Arc<dyn OrderedListStore>) -> FactoryResult<Address> {
        let mut state = self.write()?;
        let address = state.next_address(self.address)?;
        state.list_stores.insert(address, store);
        debug!(%address, "deployed list store");
        Ok(address)
    }

    /// Makes an externally constructed identity minter resolvable by
    /// address.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Persistence`] when the state lock is poisoned,
    /// or [`FactoryError::NonceExhausted`] once every address is issued.
    pub fn install_identity_minter(
        &self,
        minter: Arc<dyn IdentityMinter>,
    ) -> FactoryResult<Address> {
        let mut state = self.write()?;
        let address = state.next_address(self.address)?;
        state.identity_minters.insert(address, minter);
        debug!(%address, "deployed identity minter");
        Ok(address)
    }

    fn register_template(&self, kind: InstanceKind) -> FactoryResult<Address> {
        let mut state = self.write()?;
        let address = state.next_address(self.address)?;
        state.templates.insert(address, kind);
        debug!(%address, %kind, "registered template");
        Ok(address)
    }

    fn write(&self) -> FactoryResult<RwLockWriteGuard<'_, FactoryState>> {
        self.state
            .write()
            .map_err(|err| FactoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn read(&self) -> FactoryResult<std::sync::RwLockReadGuard<'_, FactoryState>> {
        self.state
            .read()
            .map_err(|err| FactoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[cfg(test)]
impl InMemoryInstanceFactory {
    pub(crate) fn with_nonce(address: Address, nonce: u64) -> Self {
        Self {
            address,
            state: Arc::new(RwLock::new(FactoryState {
                nonce,
                ..FactoryState::default()
            })),
        }
    }
}

impl Default for InMemoryInstanceFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstanceFactory for InMemoryInstanceFactory {
    async fn clone_list_store(
        &self,
        template: Address,
    ) -> FactoryResult<Instance<dyn OrderedListStore>> {
        let mut state = self.write()?;
        state.require_template(template, InstanceKind::ListStore)?;
        let address = state.next_address(self.address)?;
        let store: Arc<dyn OrderedListStore> = Arc::new(InMemoryListStore::new());
        state.list_stores.insert(address, Arc::clone(&store));
        debug!(%template, %address, "cloned list store");
        Ok(Instance::new(address, store))
    }

    async fn clone_identity_minter(
        &self,
        template: Address,
    ) -> FactoryResult<Instance<dyn IdentityMinter>> {
        let mut state = self.write()?;
        state.require_template(template, InstanceKind::IdentityMinter)?;
        let address = state.next_address(self.address)?;
        let minter: Arc<dyn IdentityMinter> = Arc::new(InMemoryIdentityMinter::new());
        state.identity_minters.insert(address, Arc::clone(&minter));
        debug!(%template, %address, "cloned identity minter");
        Ok(Instance::new(address, minter))
    }

    async fn list_store_at(&self, address: Address) -> FactoryResult<Arc<dyn OrderedListStore>> {
        let state = self.read()?;
        state
            .list_stores
            .get(&address)
            .cloned()
            .ok_or_else(|| state.missing_instance(address, InstanceKind::ListStore))
    }

    async fn identity_minter_at(&self, address: Address) -> FactoryResult<Arc<dyn IdentityMinter>> {
        let state = self.read()?;
        state
            .identity_minters
            .get(&address)
            .cloned()
            .ok_or_else(|| state.missing_instance(address, InstanceKind::IdentityMinter))
    }
}
