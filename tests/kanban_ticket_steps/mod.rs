//! Step definitions for kanban ticket scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
