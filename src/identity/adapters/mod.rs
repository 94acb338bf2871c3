//! Adapter implementations for identity minting.

pub mod memory;
