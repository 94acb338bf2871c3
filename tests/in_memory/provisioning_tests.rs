//! In-memory integration tests comparing the two provisioning paths.

use std::sync::Arc;

use super::helpers::{alice, bob, factory, manager_for, template_params};
use kanban_ledger::{
    access::domain::Role,
    factory::{adapters::memory::InMemoryInstanceFactory, ports::InstanceFactory},
    kanban::{
        domain::{ColumnSpec, KanbanMetadata, Status, UserWithRoles},
        services::{ManagerInitParams, OpenTicketRequest, TicketManagerError},
    },
    list_store::ports::OrderedListStore,
};
use rstest::rstest;

fn deployed_params(
    factory: &InMemoryInstanceFactory,
) -> Result<ManagerInitParams, eyre::Report> {
    let minter = factory.deploy_identity_minter()?;
    let mut columns = Vec::new();
    for name in ["To Do", "In Progress", "Done"] {
        columns.push(ColumnSpec::new(name).with_database(factory.deploy_list_store()?));
    }
    Ok(ManagerInitParams::from_deployed(
        alice(),
        minter,
        KanbanMetadata::new("Platform", "Platform team board"),
    )
    .with_users([
        UserWithRoles::new(alice(), [Role::Admin]),
        UserWithRoles::new(bob(), [Role::Member]),
    ])
    .with_statuses([Status::new("Open"), Status::new("Blocked"), Status::new("Closed")])
    .with_columns(columns))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn both_paths_behave_identically(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let cloned = manager_for(&factory, b"cloned");
    cloned.initialize(template_params(&factory)?).await?;
    let deployed = manager_for(&factory, b"deployed");
    deployed.initialize(deployed_params(&factory)?).await?;

    for manager in [&cloned, &deployed] {
        let todo = manager.column_id("To Do").await?;
        let id = manager
            .open_ticket(bob(), OpenTicketRequest::new("Same", "", todo), bob())
            .await?;
        assert_eq!(id.value(), 0);
        let store = factory
            .list_store_at(manager.column(todo).await?.database())
            .await?;
        assert_eq!(store.size_of().await?, 1);
        assert!(store.has_role(Role::Controller, manager.address()).await?);
    }

    let cloned_names: Vec<String> = cloned
        .columns()
        .await?
        .iter()
        .map(|column| column.name().to_owned())
        .collect();
    let deployed_names: Vec<String> = deployed
        .columns()
        .await?
        .iter()
        .map(|column| column.name().to_owned())
        .collect();
    assert_eq!(cloned_names, deployed_names);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kanbans_never_share_stores(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let params = deployed_params(&factory)?;
    let first = manager_for(&factory, b"first");
    first.initialize(params.clone()).await?;

    let second = manager_for(&factory, b"second");
    let result = second.initialize(params).await;

    assert!(matches!(
        result,
        Err(TicketManagerError::ListStoreInUse { .. } | TicketManagerError::IdentityMinterInUse(_))
    ));
    assert!(!second.is_initialized().await);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_are_isolated_between_kanbans(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let first = manager_for(&factory, b"one");
    first.initialize(template_params(&factory)?).await?;
    let second = manager_for(&factory, b"two");
    second.initialize(template_params(&factory)?).await?;

    let todo = first.column_id("To Do").await?;
    first
        .open_ticket(alice(), OpenTicketRequest::new("Only here", "", todo), bob())
        .await?;

    assert_eq!(first.ticket_count().await?, 1);
    assert_eq!(second.ticket_count().await?, 0);
    assert_ne!(
        first.identity_minter().await?,
        second.identity_minter().await?
    );
    Ok(())
}
