//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use kanban_ledger::{
    access::domain::{Address, Role},
    factory::adapters::memory::InMemoryInstanceFactory,
    kanban::{
        domain::{ColumnSpec, KanbanMetadata, Status, UserWithRoles},
        services::{ManagerInitParams, TicketManager},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Manager type used by the integration tests.
pub type TestManager = TicketManager<InMemoryInstanceFactory, DefaultClock>;

/// Account holding the admin role.
pub fn alice() -> Address {
    Address::derive(b"alice")
}

/// Account holding the member role.
pub fn bob() -> Address {
    Address::derive(b"bob")
}

/// Provides a fresh factory for each test.
#[fixture]
pub fn factory() -> Arc<InMemoryInstanceFactory> {
    Arc::new(InMemoryInstanceFactory::new())
}

/// Creates an uninitialized manager backed by `factory`.
pub fn manager_for(factory: &Arc<InMemoryInstanceFactory>, seed: &[u8]) -> TestManager {
    TicketManager::new(
        Address::derive(seed),
        Arc::clone(factory),
        Arc::new(DefaultClock),
    )
}

/// Builds template-clone parameters for a three-column kanban.
///
/// # Errors
///
/// Returns an error if template registration fails.
pub fn template_params(
    factory: &InMemoryInstanceFactory,
) -> Result<ManagerInitParams, eyre::Report> {
    let list_store = factory.register_list_store_template()?;
    let minter = factory.register_identity_minter_template()?;
    Ok(ManagerInitParams::from_templates(
        alice(),
        list_store,
        minter,
        KanbanMetadata::new("Platform", "Platform team board").with_uri("ipfs://platform"),
    )
    .with_users([
        UserWithRoles::new(alice(), [Role::Admin]),
        UserWithRoles::new(bob(), [Role::Member]).with_uri("ipfs://bob"),
    ])
    .with_statuses([Status::new("Open"), Status::new("Blocked"), Status::new("Closed")])
    .with_columns([
        ColumnSpec::new("To Do"),
        ColumnSpec::new("In Progress").with_uri("ipfs://wip"),
        ColumnSpec::new("Done"),
    ]))
}
