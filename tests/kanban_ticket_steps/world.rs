//! Shared world state for kanban ticket BDD scenarios.

use std::sync::Arc;

use kanban_ledger::{
    access::domain::Address,
    factory::adapters::memory::InMemoryInstanceFactory,
    kanban::{
        domain::TicketId,
        services::{TicketManager, TicketManagerError},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Manager type used by the BDD world.
pub type TestManager = TicketManager<InMemoryInstanceFactory, DefaultClock>;

/// Scenario world for kanban ticket behaviour tests.
pub struct KanbanWorld {
    pub factory: Arc<InMemoryInstanceFactory>,
    pub manager: TestManager,
    pub last_open_result: Option<Result<TicketId, TicketManagerError>>,
}

impl KanbanWorld {
    /// Creates a world with an uninitialized manager.
    #[must_use]
    pub fn new() -> Self {
        let factory = Arc::new(InMemoryInstanceFactory::new());
        let manager = TicketManager::new(
            Address::derive(b"scenario-manager"),
            Arc::clone(&factory),
            Arc::new(DefaultClock),
        );
        Self {
            factory,
            manager,
            last_open_result: None,
        }
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Resolves a scenario account name to its address.
pub fn account(name: &str) -> Address {
    Address::derive(name.as_bytes())
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
