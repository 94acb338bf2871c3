//! In-memory integration tests for kanban event delivery.

use std::sync::Arc;

use super::helpers::{alice, bob, factory, manager_for, template_params};
use kanban_ledger::{
    access::domain::{Address, Role},
    factory::adapters::memory::InMemoryInstanceFactory,
    kanban::{domain::KanbanEvent, services::OpenTicketRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_records_events_in_order(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let manager = manager_for(&factory, b"history");
    manager.initialize(template_params(&factory)?).await?;
    let carol = Address::derive(b"carol");
    manager.grant_role(alice(), Role::Member, carol).await?;
    let todo = manager.column_id("To Do").await?;
    manager
        .open_ticket(carol, OpenTicketRequest::new("Hello", "", todo), bob())
        .await?;

    let names: Vec<&str> = manager
        .events()
        .iter()
        .map(|envelope| envelope.event.name())
        .collect();
    assert_eq!(names, ["KanbanInitialized", "RoleGranted", "TicketCreated"]);
    assert!(
        manager
            .events()
            .iter()
            .all(|envelope| envelope.kanban == manager.address())
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribers_receive_ticket_payloads(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let manager = manager_for(&factory, b"subscriber");
    manager.initialize(template_params(&factory)?).await?;
    let mut receiver = manager.subscribe();
    let todo = manager.column_id("To Do").await?;

    let id = manager
        .open_ticket(bob(), OpenTicketRequest::new("Payload", "ipfs://p", todo), bob())
        .await?;

    let envelope = receiver.recv().await?;
    let KanbanEvent::TicketCreated { ticket } = envelope.event else {
        return Err(eyre::eyre!("expected a TicketCreated event"));
    };
    assert_eq!(ticket, manager.tickets(id).await?);
    Ok(())
}
