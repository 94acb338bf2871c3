//! Then steps for kanban ticket BDD scenarios.

use super::world::{KanbanWorld, run_async};
use eyre::WrapErr;
use kanban_ledger::kanban::{
    domain::{KanbanEvent, TicketId},
    services::TicketManagerError,
};
use rstest_bdd_macros::then;

#[then("the ticket is assigned id {id:u64}")]
fn ticket_assigned_id(world: &KanbanWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_open_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing open result in scenario world"))?;
    let assigned = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected ticket failure: {err}"))?;
    eyre::ensure!(
        assigned.value() == id,
        "expected ticket id {id}, found {assigned}"
    );
    Ok(())
}

#[then(r#"column "{column}" holds {count:u64} tickets"#)]
fn column_holds_tickets(
    world: &KanbanWorld,
    column: String,
    count: u64,
) -> Result<(), eyre::Report> {
    let column_id = run_async(world.manager.column_id(&column)).wrap_err("resolve column")?;
    let tickets =
        run_async(world.manager.tickets_in_column(column_id)).wrap_err("list column tickets")?;
    let held = u64::try_from(tickets.len()).wrap_err("ticket count overflow")?;
    eyre::ensure!(held == count, "expected {count} tickets in {column}, found {held}");
    Ok(())
}

#[then("the ticket count is {count:u64}")]
fn ticket_count_is(world: &KanbanWorld, count: u64) -> Result<(), eyre::Report> {
    let found = run_async(world.manager.ticket_count()).wrap_err("read ticket count")?;
    eyre::ensure!(found == count, "expected {count} tickets, found {found}");
    Ok(())
}

#[then("a ticket created event is recorded for ticket {id:u64}")]
fn ticket_created_event_recorded(world: &KanbanWorld, id: u64) -> Result<(), eyre::Report> {
    let expected = TicketId::new(id);
    let recorded = world.manager.events().into_iter().any(|envelope| {
        matches!(&envelope.event, KanbanEvent::TicketCreated { ticket } if ticket.id() == expected)
    });
    eyre::ensure!(recorded, "no TicketCreated event for ticket {id}");
    Ok(())
}

#[then("the request is rejected as unauthorized")]
fn rejected_as_unauthorized(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_open_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing open result in scenario world"))?;
    eyre::ensure!(
        matches!(result, Err(TicketManagerError::Unauthorized(_))),
        "expected unauthorized error, got {result:?}"
    );
    Ok(())
}

#[then("the request is rejected by the identity minter")]
fn rejected_by_identity_minter(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_open_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing open result in scenario world"))?;
    eyre::ensure!(
        matches!(result, Err(TicketManagerError::Identity(_))),
        "expected identity minter error, got {result:?}"
    );
    Ok(())
}
