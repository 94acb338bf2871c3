//! Error types for instance cloning and lookup.

use super::InstanceKind;
use crate::access::domain::Address;
use std::sync::Arc;
use thiserror::Error;

/// Result type for instance factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Errors returned by instance factories.
#[derive(Debug, Clone, Error)]
pub enum FactoryError {
    /// No template is registered at the address.
    #[error("no template registered at {0}")]
    UnknownTemplate(Address),

    /// No instance is deployed at the address.
    #[error("no instance deployed at {0}")]
    UnknownInstance(Address),

    /// The address holds a template or instance of another kind.
    #[error("{address} holds a {found} where a {expected} was expected")]
    WrongKind {
        /// Address that was looked up.
        address: Address,
        /// Kind the caller asked for.
        expected: InstanceKind,
        /// Kind registered at the address.
        found: InstanceKind,
    },

    /// Every address derivable from the factory nonce has been issued.
    #[error("factory nonce is exhausted")]
    NonceExhausted,

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl FactoryError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
