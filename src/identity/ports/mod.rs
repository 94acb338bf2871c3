//! Port contracts for identity token minting.

pub mod minter;

pub use minter::IdentityMinter;
