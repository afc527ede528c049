//! Expander identity and notifications.

use std::sync::atomic::{AtomicU64, Ordering};

use unfold_dom::TriggerId;

use crate::direction::ExpandState;

/// Unique identifier for an Expander instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpanderId(u64);

impl ExpanderId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Tag placed on the header node.
    pub(crate) fn trigger(self) -> TriggerId {
        TriggerId(self.0)
    }

    pub(crate) fn from_trigger(trigger: TriggerId) -> Self {
        Self(trigger.0)
    }
}

impl std::fmt::Display for ExpanderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__expander_{}", self.0)
    }
}

/// Notification queued on the host for the application to drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpanderEvent {
    /// The header was activated. Queued after the bound command ran.
    Tapped(ExpanderId),
    /// The observable state changed.
    StateChanged { id: ExpanderId, state: ExpandState },
}
