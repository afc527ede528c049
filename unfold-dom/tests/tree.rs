use std::cell::Cell;
use std::rc::Rc;

use unfold_dom::{Element, SizeInvalidatable, Tree, TreeError, TriggerId};

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_insert_builds_nested_children() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .child(Element::text("a").id("a"))
            .child(Element::col().id("inner").child(Element::text("b").id("b"))),
    );

    let inner = tree.find("inner").unwrap();
    let b = tree.find("b").unwrap();
    assert_eq!(tree.children(root).len(), 2);
    assert_eq!(tree.parent(b), Some(inner));
    assert_eq!(tree.parent(inner), Some(root));
}

#[test]
fn test_insert_child_moves_between_parents() {
    let mut tree = Tree::new();
    let a = tree.insert(Element::col());
    let b = tree.insert(Element::col());
    let leaf = tree.insert(Element::box_());

    tree.append(a, leaf).unwrap();
    tree.insert_child(b, 0, leaf).unwrap();

    assert!(tree.children(a).is_empty());
    assert_eq!(tree.children(b), &[leaf]);
    assert_eq!(tree.parent(leaf), Some(b));
}

#[test]
fn test_insert_child_clamps_index() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::box_()));
    let leaf = tree.insert(Element::box_());

    tree.insert_child(root, 99, leaf).unwrap();
    assert_eq!(tree.index_of(root, leaf), Some(1));
}

#[test]
fn test_cycles_are_rejected() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::col().id("inner")));
    let inner = tree.find("inner").unwrap();

    assert_eq!(
        tree.append(inner, root),
        Err(TreeError::CycleDetected {
            parent: inner,
            child: root
        })
    );
    assert!(matches!(
        tree.append(root, root),
        Err(TreeError::CycleDetected { .. })
    ));
}

#[test]
fn test_remove_drops_subtree() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::col().id("inner").child(Element::box_().id("leaf"))));
    let inner = tree.find("inner").unwrap();
    let leaf = tree.find("leaf").unwrap();

    tree.remove(inner).unwrap();

    assert!(!tree.contains(inner));
    assert!(!tree.contains(leaf));
    assert!(tree.children(root).is_empty());
    assert_eq!(tree.remove(inner), Err(TreeError::MissingNode(inner)));
}

// ============================================================================
// Containment Chain
// ============================================================================

#[test]
fn test_ancestors_stop_before_page_root() {
    let mut tree = Tree::new();
    let page = tree.insert(
        Element::col()
            .id("page")
            .child(Element::col().id("outer").child(Element::col().id("inner").child(Element::box_().id("leaf")))),
    );
    tree.set_page_root(page, true);

    let leaf = tree.find("leaf").unwrap();
    let chain: Vec<_> = tree.ancestors(leaf).collect();
    assert_eq!(chain, vec![tree.find("inner").unwrap(), tree.find("outer").unwrap()]);
}

#[test]
fn test_ancestors_exhaust_chain_without_page() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::box_().id("leaf")));
    let leaf = tree.find("leaf").unwrap();

    assert_eq!(tree.ancestors(leaf).collect::<Vec<_>>(), vec![root]);
    assert_eq!(tree.ancestors(root).count(), 0);
}

#[test]
fn test_find_trigger_walks_upward() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::row().id("header").child(Element::text("x").id("label"))));
    let header = tree.find("header").unwrap();
    let label = tree.find("label").unwrap();

    assert_eq!(tree.find_trigger(label), None);
    tree.add_trigger(header, TriggerId(7));
    assert_eq!(tree.find_trigger(label), Some((header, TriggerId(7))));
    assert_eq!(tree.find_trigger(root), None);

    tree.remove_trigger(header, TriggerId(7));
    assert_eq!(tree.find_trigger(label), None);
}

struct CountingSlot(Cell<usize>);

impl SizeInvalidatable for CountingSlot {
    fn invalidate_size(&self, _tree: &mut Tree) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_capability_is_shared_handle() {
    let mut tree = Tree::new();
    let node = tree.insert(Element::col());
    let slot = Rc::new(CountingSlot(Cell::new(0)));
    tree.set_capability(node, Some(slot.clone()));

    let capability = tree.capability(node).unwrap();
    capability.invalidate_size(&mut tree);
    assert_eq!(slot.0.get(), 1);

    tree.set_capability(node, None);
    assert!(tree.capability(node).is_none());
}
