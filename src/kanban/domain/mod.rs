//! Domain model for kanban boards and tickets.
//!
//! Columns and statuses are addressed by their position in the tables fixed
//! at initialization; tickets are addressed by their sequential id.

mod board;
mod config;
mod event;
mod ids;
mod ticket;

pub use board::{Column, ColumnSpec, KanbanMetadata, Status, UserWithRoles};
pub use config::ManagerConfig;
pub use event::{EventEnvelope, KanbanEvent};
pub use ids::{ColumnId, StatusId, TicketId};
pub use ticket::Ticket;
