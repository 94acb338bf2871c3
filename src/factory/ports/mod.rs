//! Port contracts for instance cloning.

pub mod factory;

pub use factory::InstanceFactory;
