//! Given steps for kanban ticket BDD scenarios.

use super::world::{KanbanWorld, account, run_async};
use eyre::WrapErr;
use kanban_ledger::{
    access::domain::Role,
    kanban::{
        domain::{ColumnSpec, KanbanMetadata, UserWithRoles},
        services::ManagerInitParams,
    },
};
use rstest_bdd_macros::given;

#[given(r#"a kanban with columns "{first}" and "{second}" administered by "{admin}""#)]
fn kanban_with_columns(
    world: &mut KanbanWorld,
    first: String,
    second: String,
    admin: String,
) -> Result<(), eyre::Report> {
    let list_store = world
        .factory
        .register_list_store_template()
        .wrap_err("register list store template")?;
    let minter = world
        .factory
        .register_identity_minter_template()
        .wrap_err("register identity minter template")?;
    let admin_account = account(&admin);
    let params = ManagerInitParams::from_templates(
        admin_account,
        list_store,
        minter,
        KanbanMetadata::new("Scenario board", "Behaviour test kanban"),
    )
    .with_users([UserWithRoles::new(admin_account, [Role::Admin])])
    .with_columns([ColumnSpec::new(first), ColumnSpec::new(second)]);

    run_async(world.manager.initialize(params)).wrap_err("initialize kanban")
}

#[given(r#""{member}" is a kanban member"#)]
fn account_is_member(world: &mut KanbanWorld, member: String) -> Result<(), eyre::Report> {
    let admin = account("alice");
    let granted = run_async(world.manager.grant_role(admin, Role::Member, account(&member)))
        .wrap_err("grant member role")?;
    eyre::ensure!(granted, "{member} already held the member role");
    Ok(())
}
