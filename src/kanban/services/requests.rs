//! Request payloads for the ticket manager.

use crate::access::domain::Address;
use crate::kanban::domain::{ColumnId, ColumnSpec, KanbanMetadata, Status, StatusId, UserWithRoles};

/// Where a collaborator instance comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceSource {
    /// Clone the template registered at this address.
    Template(Address),
    /// Use the instance already deployed at this address.
    Deployed(Address),
}

/// One-shot initialization parameters for a ticket manager.
///
/// Columns without a pre-deployed store are given a clone of
/// `list_store_template`; the template may be omitted when every column names
/// its own store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerInitParams {
    pub(crate) super_admin: Address,
    pub(crate) list_store_template: Option<Address>,
    pub(crate) identity_minter: InstanceSource,
    pub(crate) users: Vec<UserWithRoles>,
    pub(crate) statuses: Vec<Status>,
    pub(crate) columns: Vec<ColumnSpec>,
    pub(crate) kanban: KanbanMetadata,
}

impl ManagerInitParams {
    /// Creates parameters for the template-clone path.
    #[must_use]
    pub const fn from_templates(
        super_admin: Address,
        list_store_template: Address,
        identity_minter_template: Address,
        kanban: KanbanMetadata,
    ) -> Self {
        Self {
            super_admin,
            list_store_template: Some(list_store_template),
            identity_minter: InstanceSource::Template(identity_minter_template),
            users: Vec::new(),
            statuses: Vec::new(),
            columns: Vec::new(),
            kanban,
        }
    }

    /// Creates parameters for the pre-provisioned path.
    ///
    /// Every column must then name its store with
    /// [`ColumnSpec::with_database`] unless a template is added through
    /// [`ManagerInitParams::with_list_store_template`].
    #[must_use]
    pub const fn from_deployed(
        super_admin: Address,
        identity_minter: Address,
        kanban: KanbanMetadata,
    ) -> Self {
        Self {
            super_admin,
            list_store_template: None,
            identity_minter: InstanceSource::Deployed(identity_minter),
            users: Vec::new(),
            statuses: Vec::new(),
            columns: Vec::new(),
            kanban,
        }
    }

    /// Sets the list store template used for columns without a store.
    #[must_use]
    pub const fn with_list_store_template(mut self, template: Address) -> Self {
        self.list_store_template = Some(template);
        self
    }

    /// Sets the accounts seeded with roles.
    #[must_use]
    pub fn with_users(mut self, users: impl IntoIterator<Item = UserWithRoles>) -> Self {
        self.users = users.into_iter().collect();
        self
    }

    /// Sets the status table.
    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    /// Sets the column table.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }
}

/// Request payload for opening a ticket.
///
/// The request carries no identifier: the manager always assigns the next
/// sequential id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTicketRequest {
    pub(crate) name: String,
    pub(crate) uri: String,
    pub(crate) column_id: ColumnId,
    pub(crate) status_id: StatusId,
    pub(crate) data: Vec<u8>,
}

impl OpenTicketRequest {
    /// Creates a request with the unset status and no extension bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, uri: impl Into<String>, column_id: ColumnId) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            column_id,
            status_id: StatusId::default(),
            data: Vec::new(),
        }
    }

    /// Sets the workflow status.
    #[must_use]
    pub const fn with_status(mut self, status_id: StatusId) -> Self {
        self.status_id = status_id;
        self
    }

    /// Sets the extension bytes.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }
}
