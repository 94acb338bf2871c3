//! Identity token values.

use crate::access::domain::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier of a minted identity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    /// Creates a token identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A minted identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityToken {
    id: TokenId,
    owner: Address,
    uri: String,
}

impl IdentityToken {
    pub(crate) const fn new(id: TokenId, owner: Address, uri: String) -> Self {
        Self { id, owner, uri }
    }

    /// Returns the token identifier.
    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    /// Returns the current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the metadata URI supplied at mint time.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub(crate) const fn set_owner(&mut self, owner: Address) {
        self.owner = owner;
    }
}
