//! Unit tests for instance cloning.
