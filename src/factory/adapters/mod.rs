//! Adapter implementations for instance cloning.

pub mod memory;
