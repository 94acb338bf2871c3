//! Append-only list of unsigned integers guarded by a controller role.

use super::{ListStoreError, ListStoreResult};
use crate::access::domain::{AccessControlRegistry, Address, Role};

/// Ordered sequence of `u64` entries with a single controller.
///
/// Entries keep strict insertion order and are never reordered. The only
/// way to drop entries is [`OrderedList::truncate`], which the controller
/// uses to undo appends belonging to an operation that failed before it
/// committed.
///
/// # Examples
///
/// ```
/// use kanban_ledger::access::domain::Address;
/// use kanban_ledger::list_store::domain::OrderedList;
///
/// let controller = Address::derive(b"controller");
/// let mut list = OrderedList::new();
/// list.initialize(controller).expect("first initialization");
/// list.push_back(controller, 7).expect("controller may append");
///
/// assert!(list.exists());
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.head(), Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedList {
    entries: Vec<u64>,
    roles: AccessControlRegistry,
    initialized: bool,
}

impl OrderedList {
    /// Creates an empty, uninitialized list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the controller.
    ///
    /// # Errors
    ///
    /// Returns [`ListStoreError::AlreadyInitialized`] on every call after
    /// the first.
    pub fn initialize(&mut self, controller: Address) -> ListStoreResult<()> {
        if self.initialized {
            return Err(ListStoreError::AlreadyInitialized);
        }
        self.roles.seed(controller, Role::Controller);
        self.initialized = true;
        Ok(())
    }

    /// Returns `true` once a controller has been assigned.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Appends `value` as the new tail.
    ///
    /// # Errors
    ///
    /// Returns [`ListStoreError::Unauthorized`] when `caller` is not the
    /// controller.
    pub fn push_back(&mut self, caller: Address, value: u64) -> ListStoreResult<()> {
        self.roles.require(Role::Controller, caller)?;
        self.entries.push(value);
        Ok(())
    }

    /// Drops every entry after the first `length`.
    ///
    /// # Errors
    ///
    /// Returns [`ListStoreError::Unauthorized`] when `caller` is not the
    /// controller, or [`ListStoreError::InvalidLength`] when `length` is
    /// larger than the current length.
    pub fn truncate(&mut self, caller: Address, length: u64) -> ListStoreResult<()> {
        self.roles.require(Role::Controller, caller)?;
        let current = self.len();
        let target = usize::try_from(length)
            .ok()
            .filter(|_| length <= current)
            .ok_or(ListStoreError::InvalidLength {
                length: current,
                requested: length,
            })?;
        self.entries.truncate(target);
        Ok(())
    }

    /// Gives up control of an empty list, returning it to the uninitialized
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`ListStoreError::Unauthorized`] when `caller` is not the
    /// controller, or [`ListStoreError::NotEmpty`] when entries remain.
    pub fn release(&mut self, caller: Address) -> ListStoreResult<()> {
        self.roles.require(Role::Controller, caller)?;
        if self.exists() {
            return Err(ListStoreError::NotEmpty(self.len()));
        }
        *self = Self::default();
        Ok(())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::try_from(self.entries.len()).unwrap_or(u64::MAX)
    }

    /// Returns `true` when the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when the list holds at least one entry.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the first entry.
    #[must_use]
    pub fn head(&self) -> Option<u64> {
        self.entries.first().copied()
    }

    /// Returns the last entry.
    #[must_use]
    pub fn tail(&self) -> Option<u64> {
        self.entries.last().copied()
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<u64> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.entries.get(position))
            .copied()
    }

    /// Returns all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Returns `true` when `account` holds `role` on this list.
    #[must_use]
    pub fn has_role(&self, role: Role, account: Address) -> bool {
        self.roles.has_role(role, account)
    }
}
