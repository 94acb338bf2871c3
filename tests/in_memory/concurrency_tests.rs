//! In-memory integration tests for concurrent ticket opening.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::helpers::{bob, factory, manager_for, template_params};
use kanban_ledger::{
    factory::{adapters::memory::InMemoryInstanceFactory, ports::InstanceFactory},
    kanban::services::OpenTicketRequest,
    list_store::ports::OrderedListStore,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_opens_allocate_unique_ids(
    factory: Arc<InMemoryInstanceFactory>,
) -> Result<(), eyre::Report> {
    let manager = Arc::new(manager_for(&factory, b"concurrent"));
    manager.initialize(template_params(&factory)?).await?;
    let todo = manager.column_id("To Do").await?;

    let mut handles = Vec::new();
    for index in 0..16 {
        let worker = Arc::clone(&manager);
        handles.push(tokio::spawn(async move {
            let request = OpenTicketRequest::new(format!("ticket {index}"), "", todo);
            worker.open_ticket(bob(), request, bob()).await
        }));
    }
    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await??.value());
    }

    assert_eq!(ids, (0..16).collect::<BTreeSet<u64>>());
    let store = factory
        .list_store_at(manager.column(todo).await?.database())
        .await?;
    let mut entries = store.entries().await?;
    entries.sort_unstable();
    assert_eq!(entries, (0..16).collect::<Vec<u64>>());
    Ok(())
}
