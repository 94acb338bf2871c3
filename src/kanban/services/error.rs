//! Service-level errors for the ticket manager.

use crate::access::domain::{AccessError, Address, Role};
use crate::factory::domain::FactoryError;
use crate::identity::domain::IdentityError;
use crate::kanban::domain::{ColumnId, StatusId, TicketId};
use crate::list_store::domain::ListStoreError;
use thiserror::Error;

/// Result type for ticket manager operations.
pub type TicketManagerResult<T> = Result<T, TicketManagerError>;

/// Errors returned by the ticket manager.
#[derive(Debug, Error)]
pub enum TicketManagerError {
    /// The manager has already been initialized.
    #[error("kanban manager is already initialized")]
    AlreadyInitialized,

    /// The manager has not been initialized yet.
    #[error("kanban manager is not initialized")]
    NotInitialized,

    /// The caller lacks the role the operation requires.
    #[error(transparent)]
    Unauthorized(#[from] AccessError),

    /// The column identifier does not index a column.
    #[error("column {0} does not exist")]
    InvalidColumn(ColumnId),

    /// No column is registered under the name.
    #[error("no column named '{0}'")]
    UnknownColumn(String),

    /// The status identifier does not index a configured status.
    #[error("status {0} does not exist")]
    InvalidStatus(StatusId),

    /// No ticket has the identifier.
    #[error("ticket {0} not found")]
    NotFound(TicketId),

    /// Two columns share a name.
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A column name is empty after trimming.
    #[error("column names must not be empty")]
    EmptyColumnName,

    /// A name exceeds the configured length limit.
    #[error("name '{name}' exceeds {limit} characters")]
    NameTooLong {
        /// The rejected name.
        name: String,
        /// Configured limit.
        limit: usize,
    },

    /// More columns were supplied than the configuration allows.
    #[error("{count} columns exceed the limit of {limit}")]
    TooManyColumns {
        /// Number supplied.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// More statuses were supplied than the configuration allows.
    #[error("{count} statuses exceed the limit of {limit}")]
    TooManyStatuses {
        /// Number supplied.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The seed list tried to assign a system-only role.
    #[error("role {role} cannot be seeded for {account}")]
    ReservedRole {
        /// Account in the seed list.
        account: Address,
        /// Reserved role requested.
        role: Role,
    },

    /// The super-admin or a seeded account is the zero address.
    #[error("the zero address cannot hold kanban roles")]
    ZeroAccount,

    /// A column has no store and no list store template was supplied.
    #[error("column '{0}' has no list store and no template was supplied")]
    MissingListStoreTemplate(String),

    /// A pre-deployed list store is already controlled or already claimed
    /// by another column.
    #[error("list store {address} for column '{column}' is already in use")]
    ListStoreInUse {
        /// Column that named the store.
        column: String,
        /// Store address.
        address: Address,
    },

    /// A pre-deployed identity minter already has an owner.
    #[error("identity minter {0} is already in use")]
    IdentityMinterInUse(Address),

    /// Cloning or resolving a collaborator instance failed.
    #[error(transparent)]
    Factory(#[from] FactoryError),

    /// A list store operation failed.
    #[error(transparent)]
    ListStore(#[from] ListStoreError),

    /// An identity minter operation failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Undoing a failed operation failed as well.
    #[error("rollback after '{cause}' failed: {rollback}")]
    RollbackFailed {
        /// Error that triggered the rollback.
        cause: Box<TicketManagerError>,
        /// First error raised while rolling back.
        #[source]
        rollback: Box<TicketManagerError>,
    },
}
