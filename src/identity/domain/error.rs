//! Error types for identity token operations.

use super::TokenId;
use crate::access::domain::Address;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity minter operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors returned by identity minters.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The minter already has an owner.
    #[error("identity minter is already initialized")]
    AlreadyInitialized,

    /// The minter has not been initialized.
    #[error("identity minter is not initialized")]
    NotInitialized,

    /// The caller is not authorized for the operation.
    #[error("account {0} is not authorized by the identity minter")]
    Unauthorized(Address),

    /// Tokens cannot be minted or transferred to the zero address.
    #[error("identity tokens cannot be assigned to the zero address")]
    ZeroAddress,

    /// No token exists with the identifier.
    #[error("identity token not found: {0}")]
    TokenNotFound(TokenId),

    /// The token is not owned by the stated account.
    #[error("identity token {token} is not owned by {account}")]
    NotTokenOwner {
        /// Token being transferred.
        token: TokenId,
        /// Account that was expected to own it.
        account: Address,
    },

    /// Tokens have been minted, so the ledger cannot be released.
    #[error("cannot release an identity minter with {0} tokens minted")]
    TokensOutstanding(u64),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
