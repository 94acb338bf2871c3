//! Unit tests for identity minting.
