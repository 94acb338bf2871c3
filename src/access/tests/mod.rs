//! Unit tests for the access control module.
