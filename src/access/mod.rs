//! Account identity and role-based access control.
//!
//! Every mutating entry point in the crate is gated by an
//! [`AccessControlRegistry`](domain::AccessControlRegistry) lookup against a
//! closed set of [`Role`](domain::Role) values. The registry is pure domain
//! state with no infrastructure dependencies; the kanban manager and each
//! ordered-list store own one registry apiece.

pub mod domain;

#[cfg(test)]
mod tests;
