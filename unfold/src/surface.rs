//! Host that owns the tree, the animator, and a set of expanders.
//!
//! A surface drives the frame loop: [`Surface::tick`] runs queued size
//! updates, routes animation frames to their expanders, and lays the tree out
//! again. Taps and clicks are routed to the header that owns them.

use std::collections::BTreeMap;
use std::time::Instant;

use unfold_dom::{Animator, Element, NodeId, Rect, Size, Tree, TreeError, arrange, hit_test};

use crate::config::ExpanderConfig;
use crate::context::Context;
use crate::events::{ExpanderEvent, ExpanderId};
use crate::expander::Expander;

/// Upper bound on arrange passes per layout; each pass may resize expanders.
const MAX_LAYOUT_PASSES: usize = 4;

#[derive(Debug)]
pub struct Surface {
    tree: Tree,
    animator: Animator,
    expanders: BTreeMap<ExpanderId, Expander>,
    events: Vec<ExpanderEvent>,
    root: NodeId,
    viewport: Size,
    now: Instant,
}

impl Surface {
    pub fn new(viewport: Size) -> Self {
        Self::with_clock(viewport, Instant::now())
    }

    /// Create a surface whose clock starts at `now`.
    pub fn with_clock(viewport: Size, now: Instant) -> Self {
        let mut tree = Tree::new();
        let root = tree.insert(Element::col().id("__surface"));
        tree.set_page_root(root, true);
        Self {
            tree,
            animator: Animator::new(),
            expanders: BTreeMap::new(),
            events: Vec::new(),
            root,
            viewport,
            now,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    // -------------------------------------------------------------------------
    // Expanders
    // -------------------------------------------------------------------------

    /// Create an expander. Its root stays detached until [`attach`](Self::attach)
    /// or [`attach_to`](Self::attach_to).
    pub fn add_expander(&mut self, config: ExpanderConfig) -> ExpanderId {
        let mut cx = Context::new(&mut self.tree, &mut self.animator, &mut self.events, self.now);
        let expander = Expander::new(&mut cx, config);
        let id = expander.id();
        self.expanders.insert(id, expander);
        id
    }

    /// Place an expander at the end of the surface root and lay out.
    pub fn attach(&mut self, id: ExpanderId) -> Result<(), TreeError> {
        self.attach_to(id, self.root)
    }

    /// Place an expander under `parent` (for example, another expander's
    /// content) and lay out.
    pub fn attach_to(&mut self, id: ExpanderId, parent: NodeId) -> Result<(), TreeError> {
        let Some(expander) = self.expanders.get(&id) else {
            log::warn!("[surface] attach of unknown expander {}", id);
            return Ok(());
        };
        self.tree.append(parent, expander.root())?;
        self.layout();
        Ok(())
    }

    /// Drop an expander, stopping its animation and detaching its root.
    pub fn remove_expander(&mut self, id: ExpanderId) -> Option<Expander> {
        let expander = self.expanders.remove(&id)?;
        if let Some(holder) = expander.content_holder() {
            self.animator.abort_all(holder, self.now);
        }
        if let Err(err) = self.tree.detach(expander.root()) {
            log::warn!("[surface] failed to detach {}: {}", id, err);
        }
        Some(expander)
    }

    pub fn expander(&self, id: ExpanderId) -> Option<&Expander> {
        self.expanders.get(&id)
    }

    pub fn expander_ids(&self) -> impl Iterator<Item = ExpanderId> + '_ {
        self.expanders.keys().copied()
    }

    /// Run `f` against an expander with a context over this surface.
    pub fn update<R>(
        &mut self,
        id: ExpanderId,
        f: impl FnOnce(&mut Expander, &mut Context<'_>) -> R,
    ) -> Option<R> {
        let expander = self.expanders.get_mut(&id)?;
        let mut cx = Context::new(&mut self.tree, &mut self.animator, &mut self.events, self.now);
        Some(f(expander, &mut cx))
    }

    // -------------------------------------------------------------------------
    // Frame loop
    // -------------------------------------------------------------------------

    /// Arrange the tree and let every expander react to its new size,
    /// repeating while sizes keep changing.
    pub fn layout(&mut self) {
        let rect = Rect::from_size(self.viewport);
        arrange(&mut self.tree, self.root, rect);

        for pass in 0..MAX_LAYOUT_PASSES {
            let mut changed = false;
            for expander in self.expanders.values_mut() {
                let mut cx =
                    Context::new(&mut self.tree, &mut self.animator, &mut self.events, self.now);
                changed |= expander.size_allocated(&mut cx);
            }
            if !changed {
                return;
            }
            log::trace!("[surface] layout pass {} changed sizes", pass + 1);
            arrange(&mut self.tree, self.root, rect);
        }
    }

    /// Advance the clock to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        for expander in self.expanders.values_mut() {
            if expander.force_update_size_command().take_request() {
                let mut cx =
                    Context::new(&mut self.tree, &mut self.animator, &mut self.events, self.now);
                expander.force_update_size(&mut cx);
            }
        }

        for frame in self.animator.tick(now) {
            let target = self
                .expanders
                .values_mut()
                .find(|expander| expander.content_holder() == Some(frame.target));
            let Some(expander) = target else {
                log::trace!("[surface] dropping frame for {}", frame.target);
                continue;
            };
            let mut cx = Context::new(&mut self.tree, &mut self.animator, &mut self.events, now);
            expander.on_animation_frame(&mut cx, &frame);
        }

        self.layout();
    }

    pub fn is_animating(&self) -> bool {
        self.animator.has_active()
    }

    /// When the next [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.animator.next_deadline()
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.animator.set_reduced_motion(enabled);
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.layout();
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Activate the header owning `node`. Returns whether one was found.
    pub fn tap(&mut self, node: NodeId) -> bool {
        let Some((header, trigger)) = self.tree.find_trigger(node) else {
            return false;
        };
        let id = ExpanderId::from_trigger(trigger);
        log::debug!("[surface] tap on {} routed to {}", header, id);
        self.update(id, |expander, cx| expander.activate_header(cx))
            .is_some()
    }

    /// Tap whatever visible node lies under the point.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        match hit_test(&self.tree, self.root, x, y) {
            Some(node) => self.tap(node),
            None => false,
        }
    }

    pub fn drain_events(&mut self) -> Vec<ExpanderEvent> {
        std::mem::take(&mut self.events)
    }
}
