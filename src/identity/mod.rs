//! Tokenized identity records.
//!
//! Each kanban owns one identity minter; opening a ticket mints one
//! non-fungible identity token to the ticket's assignee. The kanban manager
//! consumes the minter only through the [`IdentityMinter`](ports::IdentityMinter)
//! port, so any ledger that can mint and report ownership fits.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
