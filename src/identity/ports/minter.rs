//! Identity minter port.

use crate::access::domain::Address;
use crate::identity::domain::{IdentityResult, TokenId};
use async_trait::async_trait;

/// Issues one non-fungible identity token per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityMinter: Send + Sync {
    /// Names the collection and assigns the account allowed to mint.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::AlreadyInitialized`] when an owner is
    /// already assigned.
    ///
    /// [`IdentityError::AlreadyInitialized`]: crate::identity::domain::IdentityError::AlreadyInitialized
    async fn initialize(&self, owner: Address, name: String, symbol: String) -> IdentityResult<()>;

    /// Returns the account allowed to mint, if any.
    async fn owner(&self) -> IdentityResult<Option<Address>>;

    /// Mints a new token to `to` carrying `uri`.
    ///
    /// # Errors
    ///
    /// Returns an error when `caller` is not the owner or `to` is the zero
    /// address.
    async fn mint(&self, caller: Address, to: Address, uri: String) -> IdentityResult<TokenId>;

    /// Returns the current holder of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::TokenNotFound`] for unknown tokens.
    ///
    /// [`IdentityError::TokenNotFound`]: crate::identity::domain::IdentityError::TokenNotFound
    async fn owner_of(&self, token: TokenId) -> IdentityResult<Address>;

    /// Returns the metadata URI of `token`.
    async fn token_uri(&self, token: TokenId) -> IdentityResult<String>;

    /// Returns how many tokens `account` holds.
    async fn balance_of(&self, account: Address) -> IdentityResult<u64>;

    /// Moves `token` from `from` to `to` on behalf of `caller`.
    async fn transfer_from(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        token: TokenId,
    ) -> IdentityResult<()>;

    /// Hands minting rights to `new_owner`.
    async fn transfer_ownership(&self, caller: Address, new_owner: Address) -> IdentityResult<()>;

    /// Returns a minter that has not minted to the uninitialized state.
    ///
    /// # Errors
    ///
    /// Returns an error when `caller` is not the owner or tokens exist.
    async fn release(&self, caller: Address) -> IdentityResult<()>;
}
