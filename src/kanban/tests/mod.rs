//! Unit tests for the kanban module.

mod domain_tests;
mod support;
