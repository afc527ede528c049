//! Expander widget - a header that reveals and hides a content element.
//!
//! The expander owns three nodes in the tree: its root stack, a content
//! holder, and (borrowed from the caller) a header and a content element.
//! Expanding or collapsing animates the holder's size override along the
//! direction's axis between zero and the content's natural extent.
//!
//! # Example
//!
//! ```
//! use unfold::{ExpanderConfig, Surface};
//! use unfold_dom::{Element, Size};
//!
//! let mut surface = Surface::new(Size::new(80.0, 24.0));
//! let id = surface.add_expander(ExpanderConfig::new());
//! let header = surface.tree_mut().insert(Element::text("Details"));
//! let content = surface.tree_mut().insert(Element::text("Hidden content"));
//!
//! surface.update(id, |expander, cx| {
//!     expander.set_header(cx, Some(header));
//!     expander.set_content(cx, Some(content));
//! });
//! surface.attach(id).unwrap();
//! surface.tap(header);
//! assert!(surface.expander(id).unwrap().is_expanded());
//! ```

mod content;
mod header;
mod invalidate;
mod size;
mod transition;

use std::cell::Cell;
use std::rc::Rc;

use unfold_dom::{AnimationId, Direction, Easing, Element, NodeId, SizeInvalidatable, Size};

use crate::command::{BoundCommand, Command, CommandParameter, ForceUpdateSizeCommand};
use crate::config::ExpanderConfig;
use crate::context::Context;
use crate::direction::{ExpandDirection, ExpandState};
use crate::events::{ExpanderEvent, ExpanderId};
use crate::property::Observable;
use crate::template::{BindingContext, ContentTemplate, DataTemplate};

pub use invalidate::invalidate_ancestors;
pub use transition::Transition;

use content::ContentOrigin;
use invalidate::ContentSlot;

/// Name under which the size animation runs on the content holder.
pub const EXPAND_ANIMATION: &str = "expand";

/// Scoped flag that suppresses nested content rebuilds.
#[derive(Debug, Clone, Default)]
struct RebuildGuard(Rc<Cell<bool>>);

impl RebuildGuard {
    fn is_held(&self) -> bool {
        self.0.get()
    }

    /// Hold the guard until the returned scope drops.
    fn acquire(&self) -> RebuildScope {
        let previous = self.0.replace(true);
        RebuildScope {
            flag: Rc::clone(&self.0),
            previous,
        }
    }
}

struct RebuildScope {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for RebuildScope {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

#[derive(Debug)]
pub struct Expander {
    id: ExpanderId,
    /// Stack holding header and content holder.
    root: NodeId,
    header: Option<NodeId>,
    content: Option<NodeId>,
    content_origin: ContentOrigin,
    content_template: Option<ContentTemplate>,
    previous_template: Option<DataTemplate>,
    binding_context: Option<BindingContext>,
    /// Clipping wrapper around `content` whose size request is animated.
    holder: Option<NodeId>,
    slot: Rc<ContentSlot>,
    config: ExpanderConfig,
    is_expanded: Observable<bool>,
    state: Observable<ExpandState>,
    command: Option<BoundCommand>,
    command_parameter: Option<CommandParameter>,
    force_update_size_command: ForceUpdateSizeCommand,
    /// Last known non-collapsed extent. `None` until measured.
    last_visible_size: Option<f64>,
    previous_size: Option<Size>,
    rebuilding: RebuildGuard,
    animation: Option<AnimationId>,
    /// Set when a transition finishes; the next size allocation is its own.
    settling: bool,
    last_transition: Option<Transition>,
}

impl Expander {
    /// Create an expander and its root node. The root starts detached; place
    /// it in a layout with [`Expander::root`].
    pub fn new(cx: &mut Context<'_>, config: ExpanderConfig) -> Self {
        let id = ExpanderId::new();
        let axis = config.direction.axis();
        let root = cx.tree.insert(
            Element::box_()
                .id(id.to_string())
                .direction(Direction::from_axis(axis))
                .gap(0.0),
        );

        let slot = Rc::new(ContentSlot::new(axis));
        let capability: Rc<dyn SizeInvalidatable> = slot.clone();
        cx.tree.set_capability(root, Some(capability));

        log::debug!("[{}] created with {:?}", id, config);

        Self {
            id,
            root,
            header: None,
            content: None,
            content_origin: ContentOrigin::Explicit,
            content_template: None,
            previous_template: None,
            binding_context: None,
            holder: None,
            slot,
            is_expanded: Observable::new(config.is_expanded),
            state: Observable::new(ExpandState::Collapsed),
            config,
            command: None,
            command_parameter: None,
            force_update_size_command: ForceUpdateSizeCommand::new(),
            last_visible_size: None,
            previous_size: None,
            rebuilding: RebuildGuard::default(),
            animation: None,
            settling: false,
            last_transition: None,
        }
    }

    pub fn id(&self) -> ExpanderId {
        self.id
    }

    /// The node to place in a parent layout.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn header(&self) -> Option<NodeId> {
        self.header
    }

    pub fn content(&self) -> Option<NodeId> {
        self.content
    }

    pub fn content_holder(&self) -> Option<NodeId> {
        self.holder
    }

    pub fn content_template(&self) -> Option<&ContentTemplate> {
        self.content_template.as_ref()
    }

    pub fn binding_context(&self) -> Option<&BindingContext> {
        self.binding_context.as_ref()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn is_expanded(&self) -> bool {
        self.is_expanded.get()
    }

    pub fn direction(&self) -> ExpandDirection {
        self.config.direction
    }

    pub fn state(&self) -> ExpandState {
        self.state.get()
    }

    pub fn expand_animation_length(&self) -> u32 {
        self.config.expand_animation_length
    }

    pub fn collapse_animation_length(&self) -> u32 {
        self.config.collapse_animation_length
    }

    pub fn expand_animation_easing(&self) -> Easing {
        self.config.expand_animation_easing
    }

    pub fn collapse_animation_easing(&self) -> Easing {
        self.config.collapse_animation_easing
    }

    pub fn command(&self) -> Option<Rc<dyn Command>> {
        self.command.as_ref().map(|command| Rc::clone(&command.0))
    }

    pub fn command_parameter(&self) -> Option<&CommandParameter> {
        self.command_parameter.as_ref()
    }

    /// Handle that requests [`force_update_size`](Self::force_update_size) on
    /// the host's next tick.
    pub fn force_update_size_command(&self) -> ForceUpdateSizeCommand {
        self.force_update_size_command.clone()
    }

    pub fn last_visible_size(&self) -> Option<f64> {
        self.last_visible_size
    }

    /// The most recent transition handed to the animator (or applied
    /// immediately).
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Run `handler` whenever `is_expanded` changes, from either side.
    pub fn watch_expanded(&mut self, handler: impl FnMut(&bool) + 'static) {
        self.is_expanded.watch(handler);
    }

    /// Run `handler` whenever the observable state changes.
    pub fn watch_state(&mut self, handler: impl FnMut(&ExpandState) + 'static) {
        self.state.watch(handler);
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the expanded state, starting a transition when it changes.
    pub fn set_expanded(&mut self, cx: &mut Context<'_>, expanded: bool) {
        if !self.is_expanded.set(expanded) {
            return;
        }
        log::debug!("[{}] is_expanded -> {}", self.id, expanded);
        self.rebuild(cx, false, false, false);
    }

    pub fn expand(&mut self, cx: &mut Context<'_>) {
        self.set_expanded(cx, true);
    }

    pub fn collapse(&mut self, cx: &mut Context<'_>) {
        self.set_expanded(cx, false);
    }

    pub fn toggle(&mut self, cx: &mut Context<'_>) {
        let expanded = !self.is_expanded();
        self.set_expanded(cx, expanded);
    }

    pub fn set_content_template(&mut self, cx: &mut Context<'_>, template: Option<ContentTemplate>) {
        self.content_template = template;
        self.rebuild(cx, true, false, false);
    }

    /// Replace the binding context and rebuild content from the template
    /// without animating.
    pub fn set_binding_context(&mut self, cx: &mut Context<'_>, context: Option<BindingContext>) {
        self.binding_context = context;
        self.last_visible_size = None;
        self.rebuild(cx, true, true, false);
    }

    pub fn set_direction(&mut self, cx: &mut Context<'_>, direction: ExpandDirection) {
        let old = self.config.direction;
        if old == direction {
            return;
        }
        self.config.direction = direction;
        log::debug!("[{}] direction {:?} -> {:?}", self.id, old, direction);

        if old.is_vertical() == direction.is_vertical() {
            self.position_header(cx, self.header);
            return;
        }

        let axis = direction.axis();
        if let Some(root) = cx.tree.element_mut(self.root) {
            root.direction = Direction::from_axis(axis);
        }
        self.slot.set_axis(axis);
        self.last_visible_size = None;
        self.position_header(cx, self.header);
        self.rebuild(cx, true, true, true);
    }

    pub fn set_expand_animation_length(&mut self, millis: u32) {
        self.config.expand_animation_length = millis;
    }

    pub fn set_collapse_animation_length(&mut self, millis: u32) {
        self.config.collapse_animation_length = millis;
    }

    pub fn set_expand_animation_easing(&mut self, easing: Easing) {
        self.config.expand_animation_easing = easing;
    }

    pub fn set_collapse_animation_easing(&mut self, easing: Easing) {
        self.config.collapse_animation_easing = easing;
    }

    pub fn set_command(&mut self, command: Option<Rc<dyn Command>>) {
        self.command = command.map(BoundCommand);
    }

    pub fn set_command_parameter(&mut self, parameter: Option<CommandParameter>) {
        self.command_parameter = parameter;
    }

    /// Forget the cached visible size and re-resolve the current state.
    pub fn force_update_size(&mut self, cx: &mut Context<'_>) {
        self.last_visible_size = None;
        self.on_is_expanded_changed(cx, false);
    }

    fn set_state(&mut self, cx: &mut Context<'_>, state: ExpandState) {
        if self.state.set(state) {
            log::debug!("[{}] state -> {:?}", self.id, state);
            cx.events.push(ExpanderEvent::StateChanged { id: self.id, state });
        }
    }
}
