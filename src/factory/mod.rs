//! Template cloning and instance resolution.
//!
//! The kanban manager never constructs storage directly. It asks an
//! [`InstanceFactory`](ports::InstanceFactory) to clone a registered template
//! into a fresh, independently stateful instance, or to resolve an instance
//! that was deployed ahead of time. Instances are reached only through their
//! [`Address`](crate::access::domain::Address) and an opaque handle.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
