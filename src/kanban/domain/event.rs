//! Kanban lifecycle events.

use super::Ticket;
use crate::access::domain::{Address, Role};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Observable state change of a kanban.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KanbanEvent {
    /// The kanban finished its one-shot initialization.
    KanbanInitialized {
        /// Account holding the admin and controller roles.
        super_admin: Address,
        /// Number of columns created.
        columns: u64,
        /// Number of statuses configured.
        statuses: u64,
        /// Address of the kanban's identity minter.
        identity_minter: Address,
    },
    /// A ticket was opened.
    TicketCreated {
        /// The stored ticket record.
        ticket: Ticket,
    },
    /// An account received a role.
    RoleGranted {
        /// Role granted.
        role: Role,
        /// Account receiving the role.
        account: Address,
        /// Account that granted it.
        sender: Address,
    },
    /// An account lost a role.
    RoleRevoked {
        /// Role revoked.
        role: Role,
        /// Account losing the role.
        account: Address,
        /// Account that revoked it.
        sender: Address,
    },
}

impl KanbanEvent {
    /// Returns the event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KanbanInitialized { .. } => "KanbanInitialized",
            Self::TicketCreated { .. } => "TicketCreated",
            Self::RoleGranted { .. } => "RoleGranted",
            Self::RoleRevoked { .. } => "RoleRevoked",
        }
    }
}

/// An emitted event with delivery metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique identifier for deduplication.
    pub event_id: Uuid,
    /// When the event was emitted.
    pub occurred_at: DateTime<Utc>,
    /// Address of the emitting manager.
    pub kanban: Address,
    /// The event payload.
    pub event: KanbanEvent,
}

impl EventEnvelope {
    /// Wraps `event` with a fresh identifier and the clock's current time.
    #[must_use]
    pub fn new(kanban: Address, event: KanbanEvent, clock: &impl Clock) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: clock.utc(),
            kanban,
            event,
        }
    }
}
