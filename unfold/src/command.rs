//! Commands invoked by expanders.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Opaque value handed to a [`Command`] when it runs.
pub type CommandParameter = Rc<dyn Any>;

/// Action bound to a header activation.
pub trait Command {
    fn execute(&self, parameter: Option<&CommandParameter>);
}

impl<F> Command for F
where
    F: Fn(Option<&CommandParameter>),
{
    fn execute(&self, parameter: Option<&CommandParameter>) {
        self(parameter)
    }
}

/// Handle that asks its expander to re-resolve its size.
///
/// Each expander creates one of these; clones share the same request flag.
/// The host drains it on its next tick and runs `force_update_size` there.
#[derive(Debug, Clone, Default)]
pub struct ForceUpdateSizeCommand {
    requested: Arc<AtomicBool>,
}

impl ForceUpdateSizeCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Check and clear the request (called by the host)
    pub fn take_request(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

pub(crate) struct BoundCommand(pub(crate) Rc<dyn Command>);

impl fmt::Debug for BoundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Command(..)")
    }
}
