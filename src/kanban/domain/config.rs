//! Manager limits and defaults.

/// Configuration for a [`TicketManager`](crate::kanban::services::TicketManager).
///
/// # Examples
///
/// ```
/// use kanban_ledger::kanban::domain::ManagerConfig;
///
/// let config = ManagerConfig::default();
/// assert_eq!(config.max_columns, 64);
///
/// let strict = ManagerConfig::strict();
/// assert!(strict.max_name_length < config.max_name_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Capacity of the broadcast channel carrying kanban events.
    pub event_capacity: usize,
    /// Number of past events kept for [`TicketManager::events`]; older
    /// events are dropped first.
    ///
    /// [`TicketManager::events`]: crate::kanban::services::TicketManager::events
    pub event_history: usize,
    /// Maximum number of columns accepted at initialization.
    pub max_columns: usize,
    /// Maximum number of statuses accepted at initialization.
    pub max_statuses: usize,
    /// Maximum length, in characters, of kanban, column, status, and ticket
    /// names.
    pub max_name_length: usize,
    /// Symbol given to the kanban's identity token collection.
    pub token_symbol: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
            event_history: 4096,
            max_columns: 64,
            max_statuses: 64,
            max_name_length: 256,
            token_symbol: "KBN".to_owned(),
        }
    }
}

impl ManagerConfig {
    /// Creates a configuration with reduced limits.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            event_capacity: 64,
            event_history: 256,
            max_columns: 16,
            max_statuses: 16,
            max_name_length: 64,
            ..Self::default()
        }
    }

    /// Creates a configuration that effectively disables table, name, and
    /// history limits.
    ///
    /// Useful for replaying historical kanbans.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            event_history: usize::MAX,
            max_columns: usize::MAX,
            max_statuses: usize::MAX,
            max_name_length: usize::MAX,
            ..Self::default()
        }
    }

    /// Sets the identity token symbol.
    #[must_use]
    pub fn with_token_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.token_symbol = symbol.into();
        self
    }
}
