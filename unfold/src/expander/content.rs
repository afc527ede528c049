//! Content creation and the clipping holder around it.

use unfold_dom::{Direction, Element, NodeId};

use crate::context::Context;
use crate::template::{DataTemplate, resolve_template};

use super::{EXPAND_ANIMATION, Expander};

/// Where the current content came from. Template content is owned by the
/// expander and removed from the tree when replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentOrigin {
    Explicit,
    Template,
}

fn same_template(a: Option<&DataTemplate>, b: Option<&DataTemplate>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same(b),
        _ => false,
    }
}

impl Expander {
    /// Replace the content element. The caller keeps ownership of `content`;
    /// it is detached (not removed) when replaced later.
    pub fn set_content(&mut self, cx: &mut Context<'_>, content: Option<NodeId>) {
        self.replace_content(cx, content, ContentOrigin::Explicit);
    }

    fn replace_content(
        &mut self,
        cx: &mut Context<'_>,
        content: Option<NodeId>,
        origin: ContentOrigin,
    ) {
        if self.content == content {
            return;
        }
        let old = std::mem::replace(&mut self.content, content);
        let old_origin = std::mem::replace(&mut self.content_origin, origin);

        if let Some(old) = old {
            let released = match old_origin {
                ContentOrigin::Explicit => cx.tree.detach(old),
                ContentOrigin::Template => cx.tree.remove(old),
            };
            if let Err(err) = released {
                log::warn!("[{}] failed to release content {}: {}", self.id, old, err);
            }
        }

        self.wrap_content(cx);
    }

    /// Build content from the template for the current binding context.
    ///
    /// Returns `None` when the template has not changed and content exists.
    fn create_content(&mut self, cx: &mut Context<'_>) -> Option<NodeId> {
        let template = resolve_template(
            self.content_template.as_ref(),
            self.binding_context.as_ref(),
            self.id,
        );
        if self.content.is_some() && same_template(template.as_ref(), self.previous_template.as_ref())
        {
            return None;
        }
        self.previous_template = template.clone();

        let element = template?.create_content(self.binding_context.as_ref());
        let node = cx.tree.insert(element);
        log::debug!("[{}] created content {} from template", self.id, node);
        Some(node)
    }

    /// Put the current content into a fresh holder, discarding the old one.
    ///
    /// The holder starts hidden with a zero size override.
    fn wrap_content(&mut self, cx: &mut Context<'_>) {
        if let Some(old) = self.holder.take() {
            cx.animator.abort(old, EXPAND_ANIMATION, cx.now);
            self.animation = None;

            if let Some(content) = self.content
                && cx.tree.parent(content) == Some(old)
                && let Err(err) = cx.tree.detach(content)
            {
                log::warn!("[{}] failed to detach content: {}", self.id, err);
            }
            if let Err(err) = cx.tree.remove(old) {
                log::warn!("[{}] failed to remove holder {}: {}", self.id, old, err);
            }
        }

        if let Some(content) = self.content {
            let axis = self.axis();
            let holder = cx.tree.insert(
                Element::box_()
                    .id(format!("{}-holder", self.id))
                    .direction(Direction::from_axis(axis))
                    .clip(true)
                    .visible(false),
            );
            cx.tree.set_request(holder, axis, Some(0.0));

            let index = if self.config.direction.is_regular_order() {
                usize::MAX
            } else {
                0
            };
            let placed = cx
                .tree
                .append(holder, content)
                .and_then(|()| cx.tree.insert_child(self.root, index, holder));
            match placed {
                Ok(()) => self.holder = Some(holder),
                Err(err) => {
                    log::warn!("[{}] failed to wrap content {}: {}", self.id, content, err);
                    let _ = cx.tree.remove(holder);
                }
            }
        }

        self.slot.set_holder(self.holder);
        self.slot.set_axis(self.axis());

        if self.rebuilding.is_held() {
            log::trace!("[{}] rebuild in progress, skipping nested rebuild", self.id);
        } else {
            self.rebuild(cx, true, false, false);
        }
    }

    /// Resolve content and run the expanded-state logic.
    ///
    /// Content is (re)created from the template only while expanded, unless
    /// `force_reset` asks for the existing content to be re-wrapped anyway.
    pub(crate) fn rebuild(
        &mut self,
        cx: &mut Context<'_>,
        force_update: bool,
        ignore_animation: bool,
        force_reset: bool,
    ) {
        let expanded = self.is_expanded();
        if force_reset || (expanded && (self.content.is_none() || force_update)) {
            let _scope = self.rebuilding.acquire();
            let created = if expanded {
                self.create_content(cx)
            } else {
                None
            };
            match created {
                Some(node) => self.replace_content(cx, Some(node), ContentOrigin::Template),
                None if force_reset => self.wrap_content(cx),
                None => {}
            }
        }
        self.on_is_expanded_changed(cx, ignore_animation);
    }
}
