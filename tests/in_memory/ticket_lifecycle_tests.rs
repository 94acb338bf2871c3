//! In-memory integration tests for the ticket lifecycle.

use std::sync::Arc;

use super::helpers::{alice, bob, factory, manager_for, template_params};
use kanban_ledger::{
    access::domain::Address,
    factory::{adapters::memory::InMemoryInstanceFactory, ports::InstanceFactory},
    identity::ports::IdentityMinter,
    kanban::{
        domain::{StatusId, TicketId},
        services::{OpenTicketRequest, TicketManagerError},
    },
    list_store::ports::OrderedListStore,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tickets_flow_into_their_columns(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let manager = manager_for(&factory, b"lifecycle");
    manager.initialize(template_params(&factory)?).await?;
    let todo = manager.column_id("To Do").await?;
    let done = manager.column_id("Done").await?;

    let first = manager
        .open_ticket(
            bob(),
            OpenTicketRequest::new("Write docs", "ipfs://docs", todo)
                .with_status(StatusId::new(0))
                .with_data(b"priority=high".to_vec()),
            bob(),
        )
        .await?;
    let second = manager
        .open_ticket(
            alice(),
            OpenTicketRequest::new("Release", "ipfs://release", done).with_status(StatusId::new(2)),
            alice(),
        )
        .await?;

    assert_eq!((first, second), (TicketId::new(0), TicketId::new(1)));
    let stored = manager.tickets(first).await?;
    assert_eq!(stored.data(), b"priority=high");
    assert_eq!(stored.uri(), "ipfs://docs");

    let todo_column = manager.column(todo).await?;
    let store = factory.list_store_at(todo_column.database()).await?;
    assert_eq!(store.entries().await?, vec![0]);
    assert_eq!(todo_column.ticket_count(), 1);
    assert_eq!(manager.tickets_in_column(done).await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identity_tokens_are_transferable(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let manager = manager_for(&factory, b"tokens");
    manager.initialize(template_params(&factory)?).await?;
    let todo = manager.column_id("To Do").await?;
    let id = manager
        .open_ticket(alice(), OpenTicketRequest::new("Pair", "ipfs://pair", todo), bob())
        .await?;
    let token = manager.identity_token(id).await?;
    let minter = factory
        .identity_minter_at(manager.identity_minter().await?)
        .await?;

    let carol = Address::derive(b"carol");
    minter.transfer_from(bob(), bob(), carol, token).await?;

    assert_eq!(minter.owner_of(token).await?, carol);
    assert_eq!(minter.balance_of(bob()).await?, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_requests_leave_no_gaps(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let manager = manager_for(&factory, b"gaps");
    manager.initialize(template_params(&factory)?).await?;
    let todo = manager.column_id("To Do").await?;

    let bad_status = OpenTicketRequest::new("x", "", todo).with_status(StatusId::new(3));
    let invalid_status = manager.open_ticket(alice(), bad_status, bob()).await;
    let zero_assignee = manager
        .open_ticket(alice(), OpenTicketRequest::new("y", "", todo), Address::ZERO)
        .await;
    let id = manager
        .open_ticket(alice(), OpenTicketRequest::new("z", "", todo), bob())
        .await?;

    assert!(matches!(invalid_status, Err(TicketManagerError::InvalidStatus(_))));
    assert!(matches!(zero_assignee, Err(TicketManagerError::Identity(_))));
    assert_eq!(id, TicketId::new(0));
    assert_eq!(manager.ticket_count().await?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn metadata_is_preserved(factory: Arc<InMemoryInstanceFactory>) -> Result<(), eyre::Report> {
    let manager = manager_for(&factory, b"metadata");
    manager.initialize(template_params(&factory)?).await?;

    let kanban = manager.kanban().await?;
    assert_eq!(kanban.name, "Platform");
    assert_eq!(kanban.uri, "ipfs://platform");
    let statuses: Vec<String> = manager
        .statuses()
        .await?
        .into_iter()
        .map(|status| status.name)
        .collect();
    assert_eq!(statuses, ["Open", "Blocked", "Closed"]);
    let wip = manager.column(manager.column_id("In Progress").await?).await?;
    assert_eq!(wip.uri(), "ipfs://wip");
    Ok(())
}
