//! Role membership table.

use super::{AccessError, Address, Role};
use std::collections::{BTreeSet, HashMap};

/// Maps accounts to the roles they hold.
///
/// Granting and revoking require the caller to hold [`Role::Admin`] and,
/// for roles administered by [`Role::Controller`], the controller role as
/// well. Seeding bypasses the checks and is only available inside the crate
/// for use during one-shot initialization.
///
/// # Examples
///
/// ```
/// use kanban_ledger::access::domain::{AccessControlRegistry, Address, Role};
///
/// let admin = Address::derive(b"admin");
/// let member = Address::derive(b"member");
/// let mut registry = AccessControlRegistry::with_super_admin(admin);
///
/// registry
///     .grant_role(admin, Role::Member, member)
///     .expect("admins may grant membership");
/// assert!(registry.has_role(Role::Member, member));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlRegistry {
    members: HashMap<Role, BTreeSet<Address>>,
}

impl AccessControlRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry where `super_admin` holds both [`Role::Admin`] and
    /// [`Role::Controller`].
    #[must_use]
    pub fn with_super_admin(super_admin: Address) -> Self {
        let mut registry = Self::new();
        registry.seed(super_admin, Role::Admin);
        registry.seed(super_admin, Role::Controller);
        registry
    }

    /// Returns `true` when `account` holds `role`.
    #[must_use]
    pub fn has_role(&self, role: Role, account: Address) -> bool {
        self.members
            .get(&role)
            .is_some_and(|accounts| accounts.contains(&account))
    }

    /// Returns `true` when `account` holds any of `roles`.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role], account: Address) -> bool {
        roles.iter().any(|role| self.has_role(*role, account))
    }

    /// Fails unless `account` holds `role`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unauthorized`] when the role is missing.
    pub fn require(&self, role: Role, account: Address) -> Result<(), AccessError> {
        if self.has_role(role, account) {
            Ok(())
        } else {
            Err(AccessError::Unauthorized { account, role })
        }
    }

    /// Returns the accounts holding `role` in ascending address order.
    #[must_use]
    pub fn members(&self, role: Role) -> Vec<Address> {
        self.members
            .get(&role)
            .map(|accounts| accounts.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Grants `role` to `account`.
    ///
    /// Returns `true` when the account did not already hold the role.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unauthorized`] when `caller` may not
    /// administer `role`.
    pub fn grant_role(
        &mut self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<bool, AccessError> {
        self.require_administrator(caller, role)?;
        Ok(self.seed(account, role))
    }

    /// Revokes `role` from `account`.
    ///
    /// Returns `true` when the account held the role.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unauthorized`] when `caller` may not
    /// administer `role`.
    pub fn revoke_role(
        &mut self,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<bool, AccessError> {
        self.require_administrator(caller, role)?;
        Ok(self.remove(account, role))
    }

    /// Drops `role` from the caller's own account.
    ///
    /// Returns `true` when the caller held the role.
    pub fn renounce_role(&mut self, caller: Address, role: Role) -> bool {
        self.remove(caller, role)
    }

    /// Adds `role` to `account` without any authorization check.
    pub(crate) fn seed(&mut self, account: Address, role: Role) -> bool {
        self.members.entry(role).or_default().insert(account)
    }

    fn remove(&mut self, account: Address, role: Role) -> bool {
        let Some(accounts) = self.members.get_mut(&role) else {
            return false;
        };
        let removed = accounts.remove(&account);
        if accounts.is_empty() {
            self.members.remove(&role);
        }
        removed
    }

    fn require_administrator(&self, caller: Address, role: Role) -> Result<(), AccessError> {
        self.require(Role::Admin, caller)?;
        self.require(role.admin_role(), caller)
    }
}
