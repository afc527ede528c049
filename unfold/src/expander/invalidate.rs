use std::cell::Cell;

use unfold_dom::{Axis, NodeId, SizeInvalidatable, Tree};

/// Size capability exposed on an expander's root node.
///
/// Invalidating it drops the holder's size override so the next resolution
/// measures the content again.
#[derive(Debug)]
pub(crate) struct ContentSlot {
    holder: Cell<Option<NodeId>>,
    axis: Cell<Axis>,
}

impl ContentSlot {
    pub(crate) fn new(axis: Axis) -> Self {
        Self {
            holder: Cell::new(None),
            axis: Cell::new(axis),
        }
    }

    pub(crate) fn set_holder(&self, holder: Option<NodeId>) {
        self.holder.set(holder);
    }

    pub(crate) fn set_axis(&self, axis: Axis) {
        self.axis.set(axis);
    }
}

impl SizeInvalidatable for ContentSlot {
    fn invalidate_size(&self, tree: &mut Tree) {
        if let Some(holder) = self.holder.get() {
            tree.set_request(holder, self.axis.get(), None);
        }
    }
}

/// Invalidate the size of every ancestor of `start` that can be invalidated,
/// up to (not including) the page root. Returns how many were touched.
pub fn invalidate_ancestors(tree: &mut Tree, start: NodeId) -> usize {
    let targets: Vec<_> = tree
        .ancestors(start)
        .filter_map(|id| tree.capability(id).map(|capability| (id, capability)))
        .collect();

    for (id, capability) in &targets {
        log::debug!("[invalidate] {} from {}", id, start);
        capability.invalidate_size(tree);
    }
    targets.len()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use unfold_dom::Element;

    use super::*;

    #[test]
    fn test_slot_clears_override_on_its_axis() {
        let mut tree = Tree::new();
        let holder = tree.insert(Element::box_().height(40.0).width(10.0));
        let slot = ContentSlot::new(Axis::Vertical);
        slot.set_holder(Some(holder));

        slot.invalidate_size(&mut tree);
        assert_eq!(tree.request(holder, Axis::Vertical), None);
        assert_eq!(tree.request(holder, Axis::Horizontal), Some(10.0));
    }

    #[test]
    fn test_invalidate_stops_at_page_root() {
        let mut tree = Tree::new();
        let page = tree.insert(Element::col());
        let outer = tree.insert(Element::col());
        let inner = tree.insert(Element::col());
        let leaf = tree.insert(Element::text("x"));
        tree.append(page, outer).unwrap();
        tree.append(outer, inner).unwrap();
        tree.append(inner, leaf).unwrap();
        tree.set_page_root(page, true);

        let page_holder = tree.insert(Element::box_().height(5.0));
        let page_slot = Rc::new(ContentSlot::new(Axis::Vertical));
        page_slot.set_holder(Some(page_holder));
        tree.set_capability(page, Some(page_slot));

        let outer_holder = tree.insert(Element::box_().height(5.0));
        let outer_slot = Rc::new(ContentSlot::new(Axis::Vertical));
        outer_slot.set_holder(Some(outer_holder));
        tree.set_capability(outer, Some(outer_slot));

        assert_eq!(invalidate_ancestors(&mut tree, leaf), 1);
        assert_eq!(tree.request(outer_holder, Axis::Vertical), None);
        assert_eq!(tree.request(page_holder, Axis::Vertical), Some(5.0));
    }
}
