use unfold_dom::{Edges, Element, Rect, Size, Tree, arrange, hit_test, measure};

fn arrange_root(tree: &mut Tree, root: unfold_dom::NodeId, width: f64, height: f64) {
    arrange(tree, root, Rect::new(0.0, 0.0, width, height));
}

// ============================================================================
// Measurement Tests
// ============================================================================

#[test]
fn test_column_sums_heights_and_takes_widest() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .child(Element::box_().width(30.0).height(10.0))
            .child(Element::box_().width(50.0).height(20.0)),
    );

    let size = measure(&tree, root, f64::INFINITY, f64::INFINITY);
    assert_eq!(size, Size::new(50.0, 30.0));
}

#[test]
fn test_row_sums_widths_with_gap() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::row()
            .gap(2.0)
            .child(Element::text("abc"))
            .child(Element::text("de")),
    );

    let size = measure(&tree, root, f64::INFINITY, f64::INFINITY);
    assert_eq!(size, Size::new(7.0, 1.0));
}

#[test]
fn test_invisible_children_are_skipped() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .gap(5.0)
            .child(Element::box_().height(10.0))
            .child(Element::box_().height(99.0).visible(false))
            .child(Element::box_().height(10.0)),
    );

    let size = measure(&tree, root, 100.0, f64::INFINITY);
    assert_eq!(size.height, 25.0);
}

#[test]
fn test_text_wraps_to_cross_constraint() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::text("0123456789")));

    assert_eq!(measure(&tree, root, 5.0, f64::INFINITY).height, 2.0);
    assert_eq!(measure(&tree, root, 3.0, f64::INFINITY).height, 4.0);
    assert_eq!(measure(&tree, root, f64::INFINITY, f64::INFINITY).height, 1.0);
}

#[test]
fn test_padding_adds_to_measured_size() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .padding(Edges::new(1.0, 2.0, 3.0, 4.0))
            .child(Element::box_().width(10.0).height(10.0)),
    );

    assert_eq!(
        measure(&tree, root, f64::INFINITY, f64::INFINITY),
        Size::new(16.0, 14.0)
    );
}

// ============================================================================
// Arrangement Tests
// ============================================================================

#[test]
fn test_column_places_children_in_order() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .id("root")
            .child(Element::box_().id("a").height(10.0))
            .child(Element::box_().id("b").height(20.0)),
    );
    arrange_root(&mut tree, root, 100.0, 100.0);

    let a = tree.find("a").unwrap();
    let b = tree.find("b").unwrap();
    assert_eq!(tree.bounds(a), Some(Rect::new(0.0, 0.0, 100.0, 10.0)));
    assert_eq!(tree.bounds(b), Some(Rect::new(0.0, 10.0, 100.0, 20.0)));
}

#[test]
fn test_unarranged_nodes_have_no_bounds() {
    let mut tree = Tree::new();
    let root = tree.insert(Element::col().child(Element::box_().id("a")));
    let detached = tree.insert(Element::box_());
    arrange_root(&mut tree, root, 10.0, 10.0);

    assert!(tree.bounds(tree.find("a").unwrap()).is_some());
    assert!(tree.bounds(detached).is_none());
}

#[test]
fn test_invisible_child_gets_zero_extent() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .child(Element::box_().id("hidden").height(50.0).visible(false))
            .child(Element::box_().id("shown").height(5.0)),
    );
    arrange_root(&mut tree, root, 40.0, 100.0);

    let hidden = tree.bounds(tree.find("hidden").unwrap()).unwrap();
    let shown = tree.bounds(tree.find("shown").unwrap()).unwrap();
    assert_eq!(hidden.height, 0.0);
    assert_eq!(shown.y, 0.0);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_returns_deepest_node() {
    let mut tree = Tree::new();
    let root = tree.insert(
        Element::col()
            .child(Element::row().id("header").height(1.0).child(Element::text("Title").id("title")))
            .child(Element::box_().id("body").height(10.0)),
    );
    arrange_root(&mut tree, root, 20.0, 20.0);

    assert_eq!(hit_test(&tree, root, 1.0, 0.5), tree.find("title"));
    assert_eq!(hit_test(&tree, root, 1.0, 5.0), tree.find("body"));
    assert_eq!(hit_test(&tree, root, 1.0, 15.0), Some(root));
    assert_eq!(hit_test(&tree, root, 25.0, 5.0), None);
}
