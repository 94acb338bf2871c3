//! Non-fungible identity token ledger.

use super::{IdentityError, IdentityResult, IdentityToken, TokenId};
use crate::access::domain::Address;
use std::collections::HashMap;

/// Ledger of identity tokens owned by accounts.
///
/// An owner account is assigned once at initialization and is the only
/// account allowed to mint. Token identifiers are issued sequentially from
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLedger {
    name: String,
    symbol: String,
    owner: Option<Address>,
    tokens: Vec<IdentityToken>,
    balances: HashMap<Address, u64>,
}

impl TokenLedger {
    /// Creates an uninitialized ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the collection and assigns its owner.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::AlreadyInitialized`] if an owner is already
    /// set, or [`IdentityError::ZeroAddress`] for a zero owner.
    pub fn initialize(
        &mut self,
        owner: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> IdentityResult<()> {
        if self.owner.is_some() {
            return Err(IdentityError::AlreadyInitialized);
        }
        if owner.is_zero() {
            return Err(IdentityError::ZeroAddress);
        }
        self.owner = Some(owner);
        self.name = name.into();
        self.symbol = symbol.into();
        Ok(())
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the owning account, if initialized.
    #[must_use]
    pub const fn owner(&self) -> Option<Address> {
        self.owner
    }

    /// Mints a token to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unauthorized`] unless `caller` is the owner,
    /// [`IdentityError::NotInitialized`] before initialization, or
    /// [`IdentityError::ZeroAddress`] when `to` is the zero address.
    pub fn mint(
        &mut self,
        caller: Address,
        to: Address,
        uri: impl Into<String>,
    ) -> IdentityResult<TokenId> {
        self.require_owner(caller)?;
        if to.is_zero() {
            return Err(IdentityError::ZeroAddress);
        }
        let id = TokenId::new(u64::try_from(self.tokens.len()).map_err(IdentityError::persistence)?);
        self.tokens.push(IdentityToken::new(id, to, uri.into()));
        *self.balances.entry(to).or_default() += 1;
        Ok(id)
    }

    /// Moves `token` from `from` to `to`.
    ///
    /// The caller must be the current token holder or the ledger owner.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::TokenNotFound`],
    /// [`IdentityError::NotTokenOwner`], [`IdentityError::Unauthorized`], or
    /// [`IdentityError::ZeroAddress`].
    pub fn transfer(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        token: TokenId,
    ) -> IdentityResult<()> {
        if to.is_zero() {
            return Err(IdentityError::ZeroAddress);
        }
        let owner = self.owner;
        let record = self.token_mut(token)?;
        if record.owner() != from {
            return Err(IdentityError::NotTokenOwner {
                token,
                account: from,
            });
        }
        if caller != from && Some(caller) != owner {
            return Err(IdentityError::Unauthorized(caller));
        }
        record.set_owner(to);
        if let Some(balance) = self.balances.get_mut(&from) {
            *balance = balance.saturating_sub(1);
        }
        *self.balances.entry(to).or_default() += 1;
        Ok(())
    }

    /// Hands the ledger to a new owner.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unauthorized`] unless `caller` is the
    /// current owner, or [`IdentityError::ZeroAddress`] for a zero target.
    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> IdentityResult<()> {
        self.require_owner(caller)?;
        if new_owner.is_zero() {
            return Err(IdentityError::ZeroAddress);
        }
        self.owner = Some(new_owner);
        Ok(())
    }

    /// Gives up ownership of a ledger that has not minted, returning it to
    /// the uninitialized state.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unauthorized`] unless `caller` is the owner,
    /// or [`IdentityError::TokensOutstanding`] once any token exists.
    pub fn release(&mut self, caller: Address) -> IdentityResult<()> {
        self.require_owner(caller)?;
        if !self.tokens.is_empty() {
            return Err(IdentityError::TokensOutstanding(self.total_supply()));
        }
        *self = Self::default();
        Ok(())
    }

    /// Returns the token with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::TokenNotFound`] for unknown identifiers.
    pub fn token(&self, token: TokenId) -> IdentityResult<&IdentityToken> {
        usize::try_from(token.value())
            .ok()
            .and_then(|index| self.tokens.get(index))
            .ok_or(IdentityError::TokenNotFound(token))
    }

    /// Returns how many tokens `account` holds.
    #[must_use]
    pub fn balance_of(&self, account: Address) -> u64 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Returns the number of tokens minted so far.
    #[must_use]
    pub fn total_supply(&self) -> u64 {
        u64::try_from(self.tokens.len()).unwrap_or(u64::MAX)
    }

    fn token_mut(&mut self, token: TokenId) -> IdentityResult<&mut IdentityToken> {
        usize::try_from(token.value())
            .ok()
            .and_then(|index| self.tokens.get_mut(index))
            .ok_or(IdentityError::TokenNotFound(token))
    }

    fn require_owner(&self, caller: Address) -> IdentityResult<()> {
        match self.owner {
            None => Err(IdentityError::NotInitialized),
            Some(owner) if owner == caller => Ok(()),
            Some(_) => Err(IdentityError::Unauthorized(caller)),
        }
    }
}
