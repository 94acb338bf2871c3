//! Ticket lifecycle state machine.

use crate::access::domain::{AccessControlRegistry, AccessError, Address, Role};
use crate::factory::{domain::Instance, ports::InstanceFactory};
use crate::identity::{domain::TokenId, ports::IdentityMinter};
use crate::kanban::domain::{
    Column, ColumnId, ColumnSpec, EventEnvelope, KanbanEvent, KanbanMetadata, ManagerConfig,
    Status, StatusId, Ticket, TicketId,
};
use crate::list_store::ports::OrderedListStore;
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::{info, instrument, warn};

use super::{
    InstanceSource, KanbanEventBus, ManagerInitParams, OpenTicketRequest, TicketManagerError,
    TicketManagerResult,
};

/// Roles allowed to open tickets.
const TICKET_ROLES: [Role; 2] = [Role::Member, Role::Admin];

struct ColumnSlot {
    column: Column,
    store: Arc<dyn OrderedListStore>,
}

struct StoredTicket {
    ticket: Ticket,
    token: TokenId,
}

struct ProvisionedColumn {
    spec: ColumnSpec,
    instance: Instance<dyn OrderedListStore>,
}

/// Everything a kanban records once initialized.
struct KanbanState {
    metadata: KanbanMetadata,
    columns: Vec<ColumnSlot>,
    column_index: HashMap<String, ColumnId>,
    statuses: Vec<Status>,
    roles: AccessControlRegistry,
    // Ticket ids are positions in this table, so ids are gapless by
    // construction.
    tickets: Vec<StoredTicket>,
    minter: Instance<dyn IdentityMinter>,
}

impl KanbanState {
    fn next_ticket_id(&self) -> TicketId {
        TicketId::new(count(self.tickets.len()))
    }

    fn column_slot(&self, id: ColumnId) -> TicketManagerResult<&ColumnSlot> {
        id.position()
            .and_then(|position| self.columns.get(position))
            .ok_or(TicketManagerError::InvalidColumn(id))
    }

    fn validate_status(&self, id: StatusId) -> TicketManagerResult<()> {
        if self.statuses.is_empty() {
            return Ok(());
        }
        id.position()
            .and_then(|position| self.statuses.get(position))
            .map(|_| ())
            .ok_or(TicketManagerError::InvalidStatus(id))
    }

    fn stored_ticket(&self, id: TicketId) -> TicketManagerResult<&StoredTicket> {
        id.position()
            .and_then(|position| self.tickets.get(position))
            .ok_or(TicketManagerError::NotFound(id))
    }
}

/// Kanban ticket manager.
///
/// All state sits behind a single async mutex that every operation holds
/// from start to finish, including while it awaits its list stores and
/// identity minter, so calls never interleave.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use kanban_ledger::access::domain::{Address, Role};
/// use kanban_ledger::factory::adapters::memory::InMemoryInstanceFactory;
/// use kanban_ledger::kanban::domain::{ColumnSpec, KanbanMetadata, UserWithRoles};
/// use kanban_ledger::kanban::services::{ManagerInitParams, OpenTicketRequest, TicketManager};
/// use mockable::DefaultClock;
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let factory = Arc::new(InMemoryInstanceFactory::new());
/// let admin = Address::derive(b"admin");
/// let params = ManagerInitParams::from_templates(
///     admin,
///     factory.register_list_store_template().expect("store template"),
///     factory.register_identity_minter_template().expect("minter template"),
///     KanbanMetadata::new("Roadmap", "Quarterly roadmap"),
/// )
/// .with_users([UserWithRoles::new(admin, [Role::Admin])])
/// .with_columns([ColumnSpec::new("To Do"), ColumnSpec::new("Done")]);
///
/// let manager = TicketManager::new(Address::derive(b"manager"), factory, Arc::new(DefaultClock));
/// manager.initialize(params).await.expect("initialize");
///
/// let todo = manager.column_id("To Do").await.expect("column");
/// let id = manager
///     .open_ticket(admin, OpenTicketRequest::new("Ship it", "https://example.com/1", todo), admin)
///     .await
///     .expect("open ticket");
/// assert_eq!(id.value(), 0);
/// # });
/// ```
pub struct TicketManager<F, C>
where
    F: InstanceFactory,
    C: Clock + Send + Sync,
{
    address: Address,
    factory: Arc<F>,
    clock: Arc<C>,
    config: ManagerConfig,
    events: KanbanEventBus,
    state: Mutex<Option<KanbanState>>,
}

impl<F, C> TicketManager<F, C>
where
    F: InstanceFactory,
    C: Clock + Send + Sync,
{
    /// Creates an uninitialized manager deployed at `address` with the
    /// default configuration.
    #[must_use]
    pub fn new(address: Address, factory: Arc<F>, clock: Arc<C>) -> Self {
        Self::with_config(address, factory, clock, ManagerConfig::default())
    }

    /// Creates an uninitialized manager with a custom configuration.
    #[must_use]
    pub fn with_config(
        address: Address,
        factory: Arc<F>,
        clock: Arc<C>,
        config: ManagerConfig,
    ) -> Self {
        let events = KanbanEventBus::new(config.event_capacity, config.event_history);
        Self {
            address,
            factory,
            clock,
            config,
            events,
            state: Mutex::new(None),
        }
    }

    /// Creates a manager and initializes it in one step.
    ///
    /// # Errors
    ///
    /// Returns any error [`TicketManager::initialize`] returns.
    pub async fn deploy(
        address: Address,
        factory: Arc<F>,
        clock: Arc<C>,
        config: ManagerConfig,
        params: ManagerInitParams,
    ) -> TicketManagerResult<Self> {
        let manager = Self::with_config(address, factory, clock, config);
        manager.initialize(params).await?;
        Ok(manager)
    }

    /// Returns the manager's own address, which controls every column store
    /// and owns the identity minter.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Subscribes to events emitted from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    /// Returns the most recent events, oldest first.
    ///
    /// At most [`ManagerConfig::event_history`] events are retained.
    #[must_use]
    pub fn events(&self) -> Vec<EventEnvelope> {
        self.events.history()
    }

    /// Returns `true` once initialization has succeeded.
    pub async fn is_initialized(&self) -> bool {
        self.state.lock().await.is_some()
    }

    /// Initializes the kanban.
    ///
    /// Every column receives its own list store, either cloned from the list
    /// store template or resolved from the column's pre-deployed address, and
    /// the kanban receives one identity minter. The manager becomes the
    /// controller of each store and the owner of the minter. The super-admin
    /// receives [`Role::Admin`] and [`Role::Controller`]; seeded users
    /// receive their listed roles.
    ///
    /// The minter is claimed first and the list stores after it. When a
    /// later claim fails, every instance already claimed is released, so on
    /// failure the manager stays uninitialized and the same deployed
    /// instances can be passed to a corrected retry.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::AlreadyInitialized`] on a second call,
    /// a validation error for malformed parameters, the collaborator error
    /// when cloning, resolving, or initializing an instance fails, or
    /// [`TicketManagerError::RollbackFailed`] when releasing the instances
    /// claimed before that failure fails too.
    #[instrument(skip_all, fields(manager = %self.address, super_admin = %params.super_admin))]
    pub async fn initialize(&self, params: ManagerInitParams) -> TicketManagerResult<()> {
        let mut state = self.state.lock().await;
        if state.is_some() {
            warn!("rejected repeated initialization");
            return Err(TicketManagerError::AlreadyInitialized);
        }
        self.validate_init(&params)?;

        let ManagerInitParams {
            super_admin,
            list_store_template,
            identity_minter,
            users,
            statuses,
            columns,
            kanban,
        } = params;

        let provisioned = self.provision_columns(columns, list_store_template).await?;
        let minter = self.provision_minter(identity_minter).await?;
        minter
            .handle()
            .initialize(
                self.address,
                kanban.name.clone(),
                self.config.token_symbol.clone(),
            )
            .await?;
        self.claim_list_stores(&provisioned, &minter).await?;

        let mut roles = AccessControlRegistry::with_super_admin(super_admin);
        for user in &users {
            for role in &user.roles {
                roles.seed(user.account, *role);
            }
        }

        let mut column_index = HashMap::with_capacity(provisioned.len());
        let mut slots = Vec::with_capacity(provisioned.len());
        for (position, ProvisionedColumn { spec, instance }) in provisioned.into_iter().enumerate()
        {
            column_index.insert(spec.name.clone(), ColumnId::new(count(position)));
            let (database, store) = instance.into_parts();
            slots.push(ColumnSlot {
                column: Column::from_spec(spec, database),
                store,
            });
        }

        let event = KanbanEvent::KanbanInitialized {
            super_admin,
            columns: count(slots.len()),
            statuses: count(statuses.len()),
            identity_minter: minter.address(),
        };
        info!(
            columns = slots.len(),
            statuses = statuses.len(),
            identity_minter = %minter.address(),
            "kanban initialized"
        );
        *state = Some(KanbanState {
            metadata: kanban,
            columns: slots,
            column_index,
            statuses,
            roles,
            tickets: Vec::new(),
            minter,
        });
        self.emit(event);
        Ok(())
    }

    /// Opens a ticket in its column and mints an identity token for
    /// `assignee`.
    ///
    /// The ticket receives the next sequential id, is appended to the
    /// column's list store, and is announced through a
    /// [`KanbanEvent::TicketCreated`] event. The operation is atomic: when
    /// the store or minter fails, the append is rolled back and neither the
    /// ticket table nor the id counter changes.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::Unauthorized`] unless `caller` holds
    /// [`Role::Member`] or [`Role::Admin`],
    /// [`TicketManagerError::InvalidColumn`] for an unknown column,
    /// [`TicketManagerError::InvalidStatus`] for an unknown status when
    /// statuses are configured, or the collaborator error that aborted the
    /// operation.
    #[instrument(
        skip_all,
        fields(manager = %self.address, caller = %caller, column = %request.column_id)
    )]
    pub async fn open_ticket(
        &self,
        caller: Address,
        request: OpenTicketRequest,
        assignee: Address,
    ) -> TicketManagerResult<TicketId> {
        let mut guard = self.state.lock().await;
        let state = guard.as_mut().ok_or(TicketManagerError::NotInitialized)?;

        if !state.roles.has_any_role(&TICKET_ROLES, caller) {
            warn!("rejected ticket from account without a kanban role");
            return Err(AccessError::Unauthorized {
                account: caller,
                role: Role::Member,
            }
            .into());
        }
        let store = Arc::clone(&state.column_slot(request.column_id)?.store);
        state.validate_status(request.status_id)?;
        self.check_name(&request.name)?;

        let OpenTicketRequest {
            name,
            uri,
            column_id,
            status_id,
            data,
        } = request;
        let id = state.next_ticket_id();
        let ticket = Ticket::new(id, name, uri, column_id, status_id, data);
        let minter = Arc::clone(state.minter.handle());

        let previous_size = store.size_of().await?;
        store.push_back(self.address, id.value()).await?;
        let (size, token) = match self.finish_ticket(&store, &minter, &ticket, assignee).await {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.roll_back(&store, previous_size, err).await),
        };

        if let Some(slot) = column_id
            .position()
            .and_then(|position| state.columns.get_mut(position))
        {
            slot.column.record_store_size(size);
        }
        state.tickets.push(StoredTicket {
            ticket: ticket.clone(),
            token,
        });
        info!(ticket = %id, %token, %assignee, "ticket opened");
        self.emit(KanbanEvent::TicketCreated { ticket });
        Ok(id)
    }

    /// Returns the ticket with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotFound`] when no ticket has `id`.
    pub async fn tickets(&self, id: TicketId) -> TicketManagerResult<Ticket> {
        self.read(|state| state.stored_ticket(id).map(|stored| stored.ticket.clone()))
            .await
    }

    /// Returns the number of tickets opened so far, which is also the next
    /// ticket id.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    pub async fn ticket_count(&self) -> TicketManagerResult<u64> {
        self.read(|state| Ok(state.next_ticket_id().value())).await
    }

    /// Returns the identity token minted for the ticket with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotFound`] when no ticket has `id`.
    pub async fn identity_token(&self, id: TicketId) -> TicketManagerResult<TokenId> {
        self.read(|state| state.stored_ticket(id).map(|stored| stored.token))
            .await
    }

    /// Returns the address of the kanban's identity minter.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    pub async fn identity_minter(&self) -> TicketManagerResult<Address> {
        self.read(|state| Ok(state.minter.address())).await
    }

    /// Returns the position of the column called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::UnknownColumn`] when no column has that
    /// name.
    pub async fn column_id(&self, name: &str) -> TicketManagerResult<ColumnId> {
        self.read(|state| {
            state
                .column_index
                .get(name)
                .copied()
                .ok_or_else(|| TicketManagerError::UnknownColumn(name.to_owned()))
        })
        .await
    }

    /// Returns the column at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::InvalidColumn`] for an unknown column.
    pub async fn column(&self, id: ColumnId) -> TicketManagerResult<Column> {
        self.read(|state| state.column_slot(id).map(|slot| slot.column.clone()))
            .await
    }

    /// Returns every column in table order.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    pub async fn columns(&self) -> TicketManagerResult<Vec<Column>> {
        self.read(|state| Ok(state.columns.iter().map(|slot| slot.column.clone()).collect()))
            .await
    }

    /// Returns the tickets of a column in the order they were opened.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::InvalidColumn`] for an unknown column,
    /// or the list store error when its entries cannot be read.
    pub async fn tickets_in_column(&self, id: ColumnId) -> TicketManagerResult<Vec<Ticket>> {
        let guard = self.state.lock().await;
        let state = guard.as_ref().ok_or(TicketManagerError::NotInitialized)?;
        let store = Arc::clone(&state.column_slot(id)?.store);
        let entries = store.entries().await?;
        entries
            .into_iter()
            .map(|entry| {
                state
                    .stored_ticket(TicketId::new(entry))
                    .map(|stored| stored.ticket.clone())
            })
            .collect()
    }

    /// Returns the status at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::InvalidStatus`] for an unknown status.
    pub async fn status(&self, id: StatusId) -> TicketManagerResult<Status> {
        self.read(|state| {
            id.position()
                .and_then(|position| state.statuses.get(position))
                .cloned()
                .ok_or(TicketManagerError::InvalidStatus(id))
        })
        .await
    }

    /// Returns every status in table order.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    pub async fn statuses(&self) -> TicketManagerResult<Vec<Status>> {
        self.read(|state| Ok(state.statuses.clone())).await
    }

    /// Returns the kanban metadata.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    pub async fn kanban(&self) -> TicketManagerResult<KanbanMetadata> {
        self.read(|state| Ok(state.metadata.clone())).await
    }

    /// Returns `true` when `account` holds `role` on this kanban.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    pub async fn has_role(&self, role: Role, account: Address) -> TicketManagerResult<bool> {
        self.read(|state| Ok(state.roles.has_role(role, account)))
            .await
    }

    /// Grants `role` to `account` on behalf of `caller`.
    ///
    /// Returns `true` and emits [`KanbanEvent::RoleGranted`] when membership
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::Unauthorized`] when `caller` may not
    /// administer `role`.
    #[instrument(skip_all, fields(manager = %self.address, %caller, %role, %account))]
    pub async fn grant_role(
        &self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> TicketManagerResult<bool> {
        let mut guard = self.state.lock().await;
        let state = guard.as_mut().ok_or(TicketManagerError::NotInitialized)?;
        let changed = state.roles.grant_role(caller, role, account)?;
        if changed {
            info!("role granted");
            self.emit(KanbanEvent::RoleGranted {
                role,
                account,
                sender: caller,
            });
        }
        Ok(changed)
    }

    /// Revokes `role` from `account` on behalf of `caller`.
    ///
    /// Returns `true` and emits [`KanbanEvent::RoleRevoked`] when membership
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::Unauthorized`] when `caller` may not
    /// administer `role`.
    #[instrument(skip_all, fields(manager = %self.address, %caller, %role, %account))]
    pub async fn revoke_role(
        &self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> TicketManagerResult<bool> {
        let mut guard = self.state.lock().await;
        let state = guard.as_mut().ok_or(TicketManagerError::NotInitialized)?;
        let changed = state.roles.revoke_role(caller, role, account)?;
        if changed {
            info!("role revoked");
            self.emit(KanbanEvent::RoleRevoked {
                role,
                account,
                sender: caller,
            });
        }
        Ok(changed)
    }

    /// Drops `role` from the caller's own account.
    ///
    /// # Errors
    ///
    /// Returns [`TicketManagerError::NotInitialized`] before initialization.
    #[instrument(skip_all, fields(manager = %self.address, %caller, %role))]
    pub async fn renounce_role(&self, caller: Address, role: Role) -> TicketManagerResult<bool> {
        let mut guard = self.state.lock().await;
        let state = guard.as_mut().ok_or(TicketManagerError::NotInitialized)?;
        let changed = state.roles.renounce_role(caller, role);
        if changed {
            info!("role renounced");
            self.emit(KanbanEvent::RoleRevoked {
                role,
                account: caller,
                sender: caller,
            });
        }
        Ok(changed)
    }

    async fn read<T>(
        &self,
        query: impl FnOnce(&KanbanState) -> TicketManagerResult<T>,
    ) -> TicketManagerResult<T> {
        let guard = self.state.lock().await;
        let state = guard.as_ref().ok_or(TicketManagerError::NotInitialized)?;
        query(state)
    }

    fn validate_init(&self, params: &ManagerInitParams) -> TicketManagerResult<()> {
        if params.super_admin.is_zero() {
            return Err(TicketManagerError::ZeroAccount);
        }
        if params.columns.len() > self.config.max_columns {
            return Err(TicketManagerError::TooManyColumns {
                count: params.columns.len(),
                limit: self.config.max_columns,
            });
        }
        if params.statuses.len() > self.config.max_statuses {
            return Err(TicketManagerError::TooManyStatuses {
                count: params.statuses.len(),
                limit: self.config.max_statuses,
            });
        }
        self.check_name(&params.kanban.name)?;

        let mut seen = HashSet::with_capacity(params.columns.len());
        for column in &params.columns {
            if column.name.trim().is_empty() {
                return Err(TicketManagerError::EmptyColumnName);
            }
            self.check_name(&column.name)?;
            if !seen.insert(column.name.as_str()) {
                return Err(TicketManagerError::DuplicateColumn(column.name.clone()));
            }
        }
        for status in &params.statuses {
            self.check_name(&status.name)?;
        }
        for user in &params.users {
            if user.account.is_zero() {
                return Err(TicketManagerError::ZeroAccount);
            }
            if let Some(role) = user.roles.iter().find(|role| role.is_reserved()) {
                return Err(TicketManagerError::ReservedRole {
                    account: user.account,
                    role: *role,
                });
            }
        }
        Ok(())
    }

    fn check_name(&self, name: &str) -> TicketManagerResult<()> {
        let limit = self.config.max_name_length;
        if name.chars().count() > limit {
            return Err(TicketManagerError::NameTooLong {
                name: name.to_owned(),
                limit,
            });
        }
        Ok(())
    }

    async fn provision_columns(
        &self,
        columns: Vec<ColumnSpec>,
        template: Option<Address>,
    ) -> TicketManagerResult<Vec<ProvisionedColumn>> {
        let mut claimed = HashSet::new();
        let mut provisioned = Vec::with_capacity(columns.len());
        for spec in columns {
            let instance = match (spec.database, template) {
                (Some(address), _) => {
                    let store = self.factory.list_store_at(address).await?;
                    if !claimed.insert(address) || store.is_initialized().await? {
                        return Err(TicketManagerError::ListStoreInUse {
                            column: spec.name,
                            address,
                        });
                    }
                    Instance::new(address, store)
                }
                (None, Some(source)) => self.factory.clone_list_store(source).await?,
                (None, None) => return Err(TicketManagerError::MissingListStoreTemplate(spec.name)),
            };
            provisioned.push(ProvisionedColumn { spec, instance });
        }
        Ok(provisioned)
    }

    async fn provision_minter(
        &self,
        source: InstanceSource,
    ) -> TicketManagerResult<Instance<dyn IdentityMinter>> {
        match source {
            InstanceSource::Template(template) => {
                Ok(self.factory.clone_identity_minter(template).await?)
            }
            InstanceSource::Deployed(address) => {
                let minter = self.factory.identity_minter_at(address).await?;
                if minter.owner().await?.is_some() {
                    return Err(TicketManagerError::IdentityMinterInUse(address));
                }
                Ok(Instance::new(address, minter))
            }
        }
    }

    async fn claim_list_stores(
        &self,
        columns: &[ProvisionedColumn],
        minter: &Instance<dyn IdentityMinter>,
    ) -> TicketManagerResult<()> {
        for (claimed, column) in columns.iter().enumerate() {
            if let Err(err) = column.instance.handle().initialize(self.address).await {
                return Err(self
                    .release_claims(columns, claimed, minter, err.into())
                    .await);
            }
        }
        Ok(())
    }

    async fn release_claims(
        &self,
        columns: &[ProvisionedColumn],
        claimed: usize,
        minter: &Instance<dyn IdentityMinter>,
        cause: TicketManagerError,
    ) -> TicketManagerError {
        warn!(error = %cause, claimed, "releasing instances claimed during initialization");
        let mut failure: Option<TicketManagerError> = None;
        for column in columns.iter().take(claimed) {
            if let Err(err) = column.instance.handle().release(self.address).await {
                warn!(error = %err, store = %column.instance.address(), "list store release failed");
                if failure.is_none() {
                    failure = Some(err.into());
                }
            }
        }
        if let Err(err) = minter.handle().release(self.address).await {
            warn!(error = %err, minter = %minter.address(), "identity minter release failed");
            if failure.is_none() {
                failure = Some(err.into());
            }
        }
        let Some(rollback) = failure else {
            return cause;
        };
        TicketManagerError::RollbackFailed {
            cause: Box::new(cause),
            rollback: Box::new(rollback),
        }
    }

    async fn finish_ticket(
        &self,
        store: &Arc<dyn OrderedListStore>,
        minter: &Arc<dyn IdentityMinter>,
        ticket: &Ticket,
        assignee: Address,
    ) -> TicketManagerResult<(u64, TokenId)> {
        let size = store.size_of().await?;
        let token = minter
            .mint(self.address, assignee, ticket.uri().to_owned())
            .await?;
        Ok((size, token))
    }

    async fn roll_back(
        &self,
        store: &Arc<dyn OrderedListStore>,
        size: u64,
        cause: TicketManagerError,
    ) -> TicketManagerError {
        warn!(error = %cause, size, "rolling back ticket append");
        let Err(rollback) = store.truncate(self.address, size).await else {
            return cause;
        };
        TicketManagerError::RollbackFailed {
            cause: Box::new(cause),
            rollback: Box::new(rollback.into()),
        }
    }

    fn emit(&self, event: KanbanEvent) {
        self.events
            .publish(EventEnvelope::new(self.address, event, &*self.clock));
    }
}

/// Converts a table length to the ledger's `u64` counters.
fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}
