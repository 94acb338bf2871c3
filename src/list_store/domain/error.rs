//! Error types for ordered list storage.

use crate::access::domain::AccessError;
use std::sync::Arc;
use thiserror::Error;

/// Result type for ordered list store operations.
pub type ListStoreResult<T> = Result<T, ListStoreError>;

/// Errors returned by ordered list stores.
#[derive(Debug, Clone, Error)]
pub enum ListStoreError {
    /// The store already has a controller.
    #[error("list store is already initialized")]
    AlreadyInitialized,

    /// The caller is not the store's controller.
    #[error(transparent)]
    Unauthorized(#[from] AccessError),

    /// A truncation target exceeds the current length.
    #[error("cannot truncate list of length {length} to {requested}")]
    InvalidLength {
        /// Current list length.
        length: u64,
        /// Requested length.
        requested: u64,
    },

    /// The store still holds entries and cannot be released.
    #[error("cannot release a list store holding {0} entries")]
    NotEmpty(u64),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ListStoreError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
