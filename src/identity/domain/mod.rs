//! Domain model for identity tokens.

mod error;
mod ledger;
mod token;

pub use error::{IdentityError, IdentityResult};
pub use ledger::TokenLedger;
pub use token::{IdentityToken, TokenId};
