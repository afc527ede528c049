use crate::tree::{NodeId, Tree};

/// Find the deepest visible node under the given point.
/// Returns None if `root` has not been laid out or does not contain the point.
pub fn hit_test(tree: &Tree, root: NodeId, x: f64, y: f64) -> Option<NodeId> {
    if !tree.is_visible(root) {
        return None;
    }
    let rect = tree.bounds(root)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last laid out = on top)
    for &child in tree.children(root).iter().rev() {
        if let Some(id) = hit_test(tree, child, x, y) {
            return Some(id);
        }
    }

    Some(root)
}
