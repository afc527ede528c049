//! Header placement and activation.

use unfold_dom::NodeId;

use crate::context::Context;
use crate::events::ExpanderEvent;

use super::Expander;
use super::invalidate::invalidate_ancestors;

impl Expander {
    /// Replace the header element. The new header becomes the tap target.
    pub fn set_header(&mut self, cx: &mut Context<'_>, header: Option<NodeId>) {
        if self.header == header {
            return;
        }
        let old = std::mem::replace(&mut self.header, header);
        self.position_header(cx, old);
    }

    /// Unbind `old` and place the current header before the content holder
    /// (or after it for reversed directions).
    pub(crate) fn position_header(&mut self, cx: &mut Context<'_>, old: Option<NodeId>) {
        let trigger = self.id.trigger();

        if let Some(old) = old {
            cx.tree.remove_trigger(old, trigger);
            if cx.tree.parent(old) == Some(self.root)
                && let Err(err) = cx.tree.detach(old)
            {
                log::warn!("[{}] failed to detach old header: {}", self.id, err);
            }
        }

        let Some(header) = self.header else {
            return;
        };
        let index = if self.config.direction.is_regular_order() {
            0
        } else {
            usize::MAX
        };
        if let Err(err) = cx.tree.insert_child(self.root, index, header) {
            log::warn!("[{}] failed to place header {}: {}", self.id, header, err);
            return;
        }
        cx.tree.add_trigger(header, trigger);
        log::trace!("[{}] header {} placed", self.id, header);
    }

    /// Header tap: invalidate enclosing sizes, flip the expanded state, run
    /// the bound command, then report the tap.
    pub fn activate_header(&mut self, cx: &mut Context<'_>) {
        let invalidated = invalidate_ancestors(cx.tree, self.root);
        log::debug!("[{}] tapped, {} ancestor(s) invalidated", self.id, invalidated);

        self.toggle(cx);

        if let Some(command) = &self.command {
            command.0.execute(self.command_parameter.as_ref());
        }
        cx.events.push(ExpanderEvent::Tapped(self.id));
    }
}
