use std::time::Instant;

use unfold_dom::{Animator, Tree};

use crate::events::ExpanderEvent;

/// Everything an expander touches outside itself during one operation.
///
/// Hosts build one of these per call; [`Surface`](crate::Surface) does it for
/// you.
#[derive(Debug)]
pub struct Context<'a> {
    pub tree: &'a mut Tree,
    pub animator: &'a mut Animator,
    pub events: &'a mut Vec<ExpanderEvent>,
    /// Time stamp used when committing or aborting animations.
    pub now: Instant,
}

impl<'a> Context<'a> {
    pub fn new(
        tree: &'a mut Tree,
        animator: &'a mut Animator,
        events: &'a mut Vec<ExpanderEvent>,
        now: Instant,
    ) -> Self {
        Self {
            tree,
            animator,
            events,
            now,
        }
    }
}
