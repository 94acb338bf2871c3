//! Port contracts for ordered list storage.

pub mod store;

pub use store::OrderedListStore;
