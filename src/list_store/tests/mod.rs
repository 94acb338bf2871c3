//! Unit tests for ordered list storage.
