//! Append-only ordered list storage.
//!
//! An ordered list store is a clonable, independently instantiated sequence
//! of unsigned integers with a single controller. The kanban manager gives
//! every column its own store and records ticket ids in it, so a column's
//! ticket order is exactly the store's insertion order.
//!
//! - Domain types in [`domain`]
//! - Port contract in [`ports`]
//! - In-memory adapter in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
