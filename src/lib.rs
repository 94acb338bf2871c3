//! Kanban ledger: permissioned kanban boards with append-only ticket storage.
//!
//! A kanban is driven by a [`TicketManager`](kanban::services::TicketManager)
//! that owns a fixed table of columns, an optional table of workflow
//! statuses, and a role registry. Each column appends ticket ids to its own
//! ordered list store, and every opened ticket receives a transferable
//! identity token minted to its assignee.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for collaborators
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`access`]: Addresses, roles, and role membership
//! - [`list_store`]: Append-only ordered lists of ticket ids
//! - [`identity`]: Identity tokens minted per ticket
//! - [`factory`]: Template cloning and instance resolution
//! - [`kanban`]: Columns, statuses, tickets, and the ticket manager
//! - [`telemetry`]: Structured logging setup

pub mod access;
pub mod factory;
pub mod identity;
pub mod kanban;
pub mod list_store;
pub mod telemetry;
