//! In-memory ordered list store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::access::domain::{Address, Role};
use crate::list_store::{
    domain::{ListStoreError, ListStoreResult, OrderedList},
    ports::OrderedListStore,
};

/// Thread-safe in-memory ordered list store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListStore {
    state: Arc<RwLock<OrderedList>>,
}

impl InMemoryListStore {
    /// Creates an empty, uninitialized store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ListStoreResult<RwLockReadGuard<'_, OrderedList>> {
        self.state.read().map_err(|err| {
            ListStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ListStoreResult<RwLockWriteGuard<'_, OrderedList>> {
        self.state.write().map_err(|err| {
            ListStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl OrderedListStore for InMemoryListStore {
    async fn initialize(&self, controller: Address) -> ListStoreResult<()> {
        self.write()?.initialize(controller)
    }

    async fn is_initialized(&self) -> ListStoreResult<bool> {
        Ok(self.read()?.is_initialized())
    }

    async fn push_back(&self, caller: Address, value: u64) -> ListStoreResult<()> {
        let mut list = self.write()?;
        list.push_back(caller, value)?;
        debug!(value, length = list.len(), "appended list entry");
        Ok(())
    }

    async fn truncate(&self, caller: Address, length: u64) -> ListStoreResult<()> {
        let mut list = self.write()?;
        list.truncate(caller, length)?;
        debug!(length, "truncated list");
        Ok(())
    }

    async fn release(&self, caller: Address) -> ListStoreResult<()> {
        self.write()?.release(caller)?;
        debug!(controller = %caller, "released list store");
        Ok(())
    }

    async fn size_of(&self) -> ListStoreResult<u64> {
        Ok(self.read()?.len())
    }

    async fn list_exists(&self) -> ListStoreResult<bool> {
        Ok(self.read()?.exists())
    }

    async fn get(&self, index: u64) -> ListStoreResult<Option<u64>> {
        Ok(self.read()?.get(index))
    }

    async fn entries(&self) -> ListStoreResult<Vec<u64>> {
        Ok(self.read()?.entries().to_vec())
    }

    async fn has_role(&self, role: Role, account: Address) -> ListStoreResult<bool> {
        Ok(self.read()?.has_role(role, account))
    }
}
