//! Adapter implementations for ordered list storage.

pub mod memory;
