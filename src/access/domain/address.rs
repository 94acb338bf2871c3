//! Twenty-byte account and instance addresses.

use super::ParseAddressError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Width of an address in bytes.
const ADDRESS_LEN: usize = 20;

/// Account or instance address.
///
/// Users, the kanban manager, and every cloned store or minter instance are
/// identified by an address. Addresses render as `0x`-prefixed lowercase hex.
///
/// # Examples
///
/// ```
/// use kanban_ledger::access::domain::Address;
///
/// let address: Address = "0x00000000000000000000000000000000000000ff"
///     .parse()
///     .expect("valid address");
/// assert_eq!(address.to_string(), "0x00000000000000000000000000000000000000ff");
/// assert!(!address.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0_u8; ADDRESS_LEN]);

    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Derives an address from arbitrary seed material.
    ///
    /// The address is the first twenty bytes of the SHA-256 digest of the
    /// seed, so equal seeds always yield equal addresses.
    #[must_use]
    pub fn derive(seed: &[u8]) -> Self {
        let digest = Sha256::digest(seed);
        let mut bytes = [0_u8; ADDRESS_LEN];
        for (slot, byte) in bytes.iter_mut().zip(digest.iter()) {
            *slot = *byte;
        }
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns `true` for the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != ADDRESS_LEN * 2 || !digits.is_ascii() {
            return Err(ParseAddressError(value.to_owned()));
        }

        let mut bytes = [0_u8; ADDRESS_LEN];
        for (slot, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            let pair_str =
                std::str::from_utf8(pair).map_err(|_| ParseAddressError(value.to_owned()))?;
            *slot = u8::from_str_radix(pair_str, 16)
                .map_err(|_| ParseAddressError(value.to_owned()))?;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = ParseAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}
