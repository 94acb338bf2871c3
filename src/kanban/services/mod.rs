//! Application services for kanban orchestration.

mod error;
mod events;
mod manager;
mod requests;

pub use error::{TicketManagerError, TicketManagerResult};
pub use events::KanbanEventBus;
pub use manager::TicketManager;
pub use requests::{InstanceSource, ManagerInitParams, OpenTicketRequest};
