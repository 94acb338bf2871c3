//! Kanban metadata, column, status, and user seed records.

use crate::access::domain::{Address, Role};
use serde::{Deserialize, Serialize};

/// Descriptive metadata for a kanban, fixed at initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanMetadata {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Opaque metadata pointer.
    pub uri: String,
    /// Opaque extension bytes.
    pub data: Vec<u8>,
}

impl KanbanMetadata {
    /// Creates metadata with empty `uri` and `data`.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            uri: String::new(),
            data: Vec::new(),
        }
    }

    /// Sets the metadata pointer.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Sets the extension bytes.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }
}

/// Column definition supplied at initialization.
///
/// A column either names an already deployed list store through
/// [`ColumnSpec::with_database`] or receives a clone of the list store
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique column name.
    pub name: String,
    /// Opaque metadata pointer.
    pub uri: String,
    /// Opaque extension bytes.
    pub data: Vec<u8>,
    /// Pre-deployed list store, if any.
    pub database: Option<Address>,
}

impl ColumnSpec {
    /// Creates a column definition that will receive a cloned store.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: String::new(),
            data: Vec::new(),
            database: None,
        }
    }

    /// Sets the metadata pointer.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Sets the extension bytes.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Uses the list store already deployed at `database`.
    #[must_use]
    pub const fn with_database(mut self, database: Address) -> Self {
        self.database = Some(database);
        self
    }
}

/// A column as recorded by the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    uri: String,
    data: Vec<u8>,
    database: Address,
    ticket_count: u64,
}

impl Column {
    pub(crate) fn from_spec(spec: ColumnSpec, database: Address) -> Self {
        Self {
            name: spec.name,
            uri: spec.uri,
            data: spec.data,
            database,
            ticket_count: 0,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the metadata pointer.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the extension bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the address of the column's list store.
    #[must_use]
    pub const fn database(&self) -> Address {
        self.database
    }

    /// Returns the number of tickets in the column, as last reported by its
    /// list store.
    #[must_use]
    pub const fn ticket_count(&self) -> u64 {
        self.ticket_count
    }

    pub(crate) const fn record_store_size(&mut self, size: u64) {
        self.ticket_count = size;
    }
}

/// A workflow status assignable to tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Status name.
    pub name: String,
    /// Opaque metadata pointer.
    pub uri: String,
    /// Opaque extension bytes.
    pub data: Vec<u8>,
}

impl Status {
    /// Creates a status with empty `uri` and `data`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: String::new(),
            data: Vec::new(),
        }
    }

    /// Sets the metadata pointer.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }
}

/// An account and the roles it receives at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithRoles {
    /// Account receiving the roles.
    pub account: Address,
    /// Opaque profile pointer.
    pub uri: String,
    /// Roles to grant.
    pub roles: Vec<Role>,
    /// Opaque extension bytes.
    pub data: Vec<u8>,
}

impl UserWithRoles {
    /// Creates a seed entry for `account`.
    #[must_use]
    pub fn new(account: Address, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            account,
            uri: String::new(),
            roles: roles.into_iter().collect(),
            data: Vec::new(),
        }
    }

    /// Sets the profile pointer.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }
}
