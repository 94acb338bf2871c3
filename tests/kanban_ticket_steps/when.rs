//! When steps for kanban ticket BDD scenarios.

use super::world::{KanbanWorld, account, run_async};
use eyre::WrapErr;
use kanban_ledger::{access::domain::Address, kanban::services::OpenTicketRequest};
use rstest_bdd_macros::when;

fn open_ticket(
    world: &mut KanbanWorld,
    caller: &str,
    name: String,
    column: &str,
    assignee: Address,
) -> Result<(), eyre::Report> {
    let column_id =
        run_async(world.manager.column_id(column)).wrap_err("resolve column by name")?;
    let request = OpenTicketRequest::new(name, "", column_id);
    world.last_open_result = Some(run_async(world.manager.open_ticket(
        account(caller),
        request,
        assignee,
    )));
    Ok(())
}

#[when(r#""{caller}" opens ticket "{name}" in column "{column}" for "{assignee}""#)]
fn opens_ticket_for(
    world: &mut KanbanWorld,
    caller: String,
    name: String,
    column: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    open_ticket(world, &caller, name, &column, account(&assignee))
}

#[when(r#""{caller}" opens ticket "{name}" in column "{column}" for the zero address"#)]
fn opens_ticket_for_zero_address(
    world: &mut KanbanWorld,
    caller: String,
    name: String,
    column: String,
) -> Result<(), eyre::Report> {
    open_ticket(world, &caller, name, &column, Address::ZERO)
}
