//! Event publication for kanban lifecycle events.

use crate::kanban::domain::EventEnvelope;
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

/// Broadcasts kanban events to live subscribers and keeps a bounded log of
/// the most recent ones.
///
/// Publishing never fails: events are appended to the log even when nobody
/// is subscribed, and slow subscribers observe a lag error on their own
/// receiver rather than blocking the publisher. Once the log holds
/// `history_limit` events, each new event evicts the oldest.
#[derive(Debug, Clone)]
pub struct KanbanEventBus {
    sender: broadcast::Sender<EventEnvelope>,
    log: Arc<RwLock<VecDeque<EventEnvelope>>>,
    history_limit: usize,
}

impl KanbanEventBus {
    /// Creates a bus whose channel buffers up to `capacity` events per
    /// subscriber and whose log keeps the last `history_limit` events.
    #[must_use]
    pub fn new(capacity: usize, history_limit: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            log: Arc::new(RwLock::new(VecDeque::new())),
            history_limit,
        }
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Appends `envelope` to the log and broadcasts it.
    pub fn publish(&self, envelope: EventEnvelope) {
        let name = envelope.event.name();
        if self.history_limit > 0 {
            let mut log = self.log.write().unwrap_or_else(PoisonError::into_inner);
            if log.len() >= self.history_limit {
                drop(log.pop_front());
            }
            log.push_back(envelope.clone());
        }
        if self.sender.send(envelope).is_err() {
            debug!(event = name, "no live event subscribers");
        }
    }

    /// Returns the retained events, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<EventEnvelope> {
        self.log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}
