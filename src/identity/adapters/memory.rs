//! In-memory identity minter.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::access::domain::Address;
use crate::identity::{
    domain::{IdentityError, IdentityResult, TokenId, TokenLedger},
    ports::IdentityMinter,
};

/// Thread-safe in-memory identity minter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityMinter {
    state: Arc<RwLock<TokenLedger>>,
}

impl InMemoryIdentityMinter {
    /// Creates an uninitialized minter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collection name and symbol.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Persistence`] when the state lock is
    /// poisoned.
    pub fn collection(&self) -> IdentityResult<(String, String)> {
        let ledger = self.read()?;
        Ok((ledger.name().to_owned(), ledger.symbol().to_owned()))
    }

    /// Returns the number of tokens minted so far.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Persistence`] when the state lock is
    /// poisoned.
    pub fn total_supply(&self) -> IdentityResult<u64> {
        Ok(self.read()?.total_supply())
    }

    fn read(&self) -> IdentityResult<RwLockReadGuard<'_, TokenLedger>> {
        self.state
            .read()
            .map_err(|err| IdentityError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> IdentityResult<RwLockWriteGuard<'_, TokenLedger>> {
        self.state
            .write()
            .map_err(|err| IdentityError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl IdentityMinter for InMemoryIdentityMinter {
    async fn initialize(&self, owner: Address, name: String, symbol: String) -> IdentityResult<()> {
        self.write()?.initialize(owner, name, symbol)
    }

    async fn owner(&self) -> IdentityResult<Option<Address>> {
        Ok(self.read()?.owner())
    }

    async fn mint(&self, caller: Address, to: Address, uri: String) -> IdentityResult<TokenId> {
        let token = self.write()?.mint(caller, to, uri)?;
        debug!(%token, owner = %to, "minted identity token");
        Ok(token)
    }

    async fn owner_of(&self, token: TokenId) -> IdentityResult<Address> {
        Ok(self.read()?.token(token)?.owner())
    }

    async fn token_uri(&self, token: TokenId) -> IdentityResult<String> {
        Ok(self.read()?.token(token)?.uri().to_owned())
    }

    async fn balance_of(&self, account: Address) -> IdentityResult<u64> {
        Ok(self.read()?.balance_of(account))
    }

    async fn transfer_from(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        token: TokenId,
    ) -> IdentityResult<()> {
        self.write()?.transfer(caller, from, to, token)
    }

    async fn transfer_ownership(&self, caller: Address, new_owner: Address) -> IdentityResult<()> {
        self.write()?.transfer_ownership(caller, new_owner)
    }

    async fn release(&self, caller: Address) -> IdentityResult<()> {
        self.write()?.release(caller)?;
        debug!(owner = %caller, "released identity minter");
        Ok(())
    }
}
