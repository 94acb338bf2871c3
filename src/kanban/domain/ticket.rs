//! Ticket record.

use super::{ColumnId, StatusId, TicketId};
use serde::{Deserialize, Serialize};

/// A stored ticket.
///
/// Fields serialize in the order `id`, `name`, `uri`, `column_id`,
/// `status_id`, `data`, which is also the payload order of the
/// `TicketCreated` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    name: String,
    uri: String,
    column_id: ColumnId,
    status_id: StatusId,
    data: Vec<u8>,
}

impl Ticket {
    pub(crate) const fn new(
        id: TicketId,
        name: String,
        uri: String,
        column_id: ColumnId,
        status_id: StatusId,
        data: Vec<u8>,
    ) -> Self {
        Self {
            id,
            name,
            uri,
            column_id,
            status_id,
            data,
        }
    }

    /// Returns the manager-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the ticket name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the metadata pointer, also used as the identity token URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the owning column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Returns the extension bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
