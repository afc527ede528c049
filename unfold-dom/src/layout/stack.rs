//! Stack layout: measurement and arrangement passes over a [`Tree`].
//!
//! Measurement answers "how large would this node like to be" under a pair of
//! constraints (`f64::INFINITY` means unconstrained). Arrangement assigns
//! bounds top-down, giving each stacked child its measured main-axis extent
//! and the container's full cross-axis extent.

use crate::element::Content;
use crate::text::wrapped_size;
use crate::tree::{NodeId, Tree};
use crate::types::{Axis, Rect, Size};

/// Natural size of `id` given the available width and height.
///
/// Invisible and missing nodes measure as zero. Explicit requests replace the
/// measured content box on their axis; padding is added on top.
pub fn measure(tree: &Tree, id: NodeId, width: f64, height: f64) -> Size {
    let Some(node) = tree.get(id) else {
        return Size::ZERO;
    };
    let element = &node.element;
    if !element.visible {
        return Size::ZERO;
    }

    let padding = element.padding;
    let inner_width = element
        .width
        .unwrap_or((width - padding.horizontal_total()).max(0.0));
    let inner_height = element
        .height
        .unwrap_or((height - padding.vertical_total()).max(0.0));

    let content = match &element.content {
        Content::Text(text) => wrapped_size(text, inner_width),
        Content::None | Content::Children(_) => {
            measure_children(tree, id, inner_width, inner_height)
        }
    };

    Size::new(
        element.width.unwrap_or(content.width) + padding.horizontal_total(),
        element.height.unwrap_or(content.height) + padding.vertical_total(),
    )
}

fn measure_children(tree: &Tree, id: NodeId, width: f64, height: f64) -> Size {
    let Some(element) = tree.element(id) else {
        return Size::ZERO;
    };
    let axis = element.direction.main_axis();
    let cross_available = Size::new(width, height).extent(axis.cross());

    let mut main = 0.0;
    let mut cross: f64 = 0.0;
    let mut count = 0usize;

    for &child in tree.children(id) {
        if !tree.is_visible(child) {
            continue;
        }
        let proposal = Size::from_axes(axis, f64::INFINITY, cross_available);
        let size = measure(tree, child, proposal.width, proposal.height);
        main += size.extent(axis);
        cross = cross.max(size.extent(axis.cross()));
        count += 1;
    }

    if count > 1 {
        main += element.gap * (count - 1) as f64;
    }

    Size::from_axes(axis, main, cross)
}

/// Assign bounds to `root` and everything reachable below it.
pub fn arrange(tree: &mut Tree, root: NodeId, rect: Rect) {
    tree.set_bounds(root, Some(rect));
    arrange_children(tree, root, rect);
}

fn arrange_children(tree: &mut Tree, id: NodeId, rect: Rect) {
    let Some(element) = tree.element(id) else {
        return;
    };
    if !element.is_container() {
        return;
    }

    let padding = element.padding;
    let gap = element.gap;
    let axis = element.direction.main_axis();
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);
    let cross = inner.extent(axis.cross());

    let children = tree.children(id).to_vec();
    let mut offset = 0.0;
    let mut placed = 0usize;

    for child in children {
        if tree.is_visible(child) && placed > 0 {
            offset += gap;
        }
        let origin = match axis {
            Axis::Horizontal => (inner.x + offset, inner.y),
            Axis::Vertical => (inner.x, inner.y + offset),
        };

        if !tree.is_visible(child) {
            let size = Size::from_axes(axis, 0.0, cross);
            tree.set_bounds(child, Some(Rect::new(origin.0, origin.1, size.width, size.height)));
            continue;
        }

        let proposal = Size::from_axes(axis, f64::INFINITY, cross);
        let main = measure(tree, child, proposal.width, proposal.height).extent(axis);
        let size = Size::from_axes(axis, main, cross);
        let child_rect = Rect::new(origin.0, origin.1, size.width, size.height);

        log::trace!("[layout] {} -> {:?}", child, child_rect);
        tree.set_bounds(child, Some(child_rect));
        arrange_children(tree, child, child_rect);

        offset += main;
        placed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::types::Edges;

    #[test]
    fn text_measures_by_display_width() {
        let mut tree = Tree::new();
        let id = tree.insert(Element::text("hello"));
        let size = measure(&tree, id, f64::INFINITY, f64::INFINITY);
        assert_eq!(size, Size::new(5.0, 1.0));
    }

    #[test]
    fn request_replaces_content_box_and_keeps_padding() {
        let mut tree = Tree::new();
        let id = tree.insert(
            Element::col()
                .height(40.0)
                .padding(Edges::symmetric(5.0, 0.0))
                .child(Element::box_().height(100.0)),
        );
        let size = measure(&tree, id, 80.0, f64::INFINITY);
        assert_eq!(size.height, 50.0);
    }
}
