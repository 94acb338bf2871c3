//! Permissioned kanban ticket ledger.
//!
//! The [`TicketManager`](services::TicketManager) is the orchestrating state
//! machine of a kanban: it records metadata, columns, statuses and role
//! membership once at initialization, then allocates sequential ticket ids,
//! appends each ticket to its column's ordered list store, and mints an
//! identity token to the ticket's assignee. Every mutation is all-or-nothing.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
