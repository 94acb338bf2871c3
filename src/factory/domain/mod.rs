//! Domain model for cloned instances.

mod error;
mod instance;

pub use error::{FactoryError, FactoryResult};
pub use instance::{Instance, InstanceKind, clone_address};
