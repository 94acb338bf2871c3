//! Shared fixtures for kanban service tests.

use std::sync::Arc;

use crate::access::domain::{Address, Role};
use crate::factory::adapters::memory::InMemoryInstanceFactory;
use crate::kanban::{
    domain::{ColumnSpec, KanbanMetadata, UserWithRoles},
    services::{ManagerInitParams, TicketManager},
};
use mockable::DefaultClock;
use rstest::fixture;

pub type TestManager = TicketManager<InMemoryInstanceFactory, DefaultClock>;

pub fn admin() -> Address {
    Address::derive(b"admin")
}

pub fn member() -> Address {
    Address::derive(b"member")
}

pub fn outsider() -> Address {
    Address::derive(b"outsider")
}

pub struct Harness {
    pub factory: Arc<InMemoryInstanceFactory>,
    pub manager: TestManager,
}

impl Harness {
    pub fn new() -> Self {
        let factory = Arc::new(InMemoryInstanceFactory::new());
        let manager = TicketManager::new(
            Address::derive(b"manager"),
            Arc::clone(&factory),
            Arc::new(DefaultClock),
        );
        Self { factory, manager }
    }

    pub fn template_params(&self) -> ManagerInitParams {
        let list_store = self
            .factory
            .register_list_store_template()
            .expect("list store template");
        let minter = self
            .factory
            .register_identity_minter_template()
            .expect("minter template");
        ManagerInitParams::from_templates(
            admin(),
            list_store,
            minter,
            KanbanMetadata::new("Roadmap", "Quarterly roadmap"),
        )
        .with_users([
            UserWithRoles::new(admin(), [Role::Admin]),
            UserWithRoles::new(member(), [Role::Member]),
        ])
        .with_columns([
            ColumnSpec::new("To Do"),
            ColumnSpec::new("In Progress"),
            ColumnSpec::new("Done"),
        ])
    }
}

#[fixture]
pub fn harness() -> Harness {
    Harness::new()
}

#[fixture]
pub async fn initialized() -> Harness {
    let harness = Harness::new();
    harness
        .manager
        .initialize(harness.template_params())
        .await
        .expect("initialize kanban");
    harness
}
