//! Domain model for ordered list storage.

mod error;
mod list;

pub use error::{ListStoreError, ListStoreResult};
pub use list::OrderedList;
