#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use style_tree::widget_type::{
    BORDERED_PANEL, BUTTON, CONTAINER, CONTAINER_BUTTON, CONTROL, LABEL, PANEL_CONTAINER,
};
use style_tree::{DepthTag, MemoryTree, NodeView as _};

#[test]
fn subtype_chain_matches_supertypes_only() {
    assert!(BORDERED_PANEL.is_a(&PANEL_CONTAINER));
    assert!(BORDERED_PANEL.is_a(&CONTAINER));
    assert!(BORDERED_PANEL.is_a(&CONTROL));
    assert!(BUTTON.is_a(&CONTAINER_BUTTON));
    assert!(!PANEL_CONTAINER.is_a(&BORDERED_PANEL));
    assert!(!LABEL.is_a(&CONTAINER));
}

#[test]
fn ancestors_walk_nearest_first_and_exclude_self() {
    let mut tree = MemoryTree::new();
    let root = tree.add(&CONTAINER);
    let middle = tree.add_child(root, &PANEL_CONTAINER);
    let leaf = tree.add_child(middle, &LABEL);

    let walked: Vec<usize> = tree.ancestors(leaf).collect();
    assert_eq!(walked, vec![middle, root]);
    assert_eq!(tree.ancestors(root).count(), 0);
}

#[test]
fn ancestors_restart_from_a_fresh_call() {
    let mut tree = MemoryTree::new();
    let root = tree.add(&CONTAINER);
    let leaf = tree.add_child(root, &LABEL);

    let mut walk = tree.ancestors(leaf);
    assert_eq!(walk.next(), Some(root));
    assert_eq!(walk.next(), None);
    assert_eq!(walk.next(), None);
    assert_eq!(tree.ancestors(leaf).next(), Some(root));
}

#[test]
fn child_index_follows_current_order() {
    let mut tree = MemoryTree::new();
    let root = tree.add(&CONTAINER);
    let first = tree.add_child(root, &LABEL);
    let second = tree.add_child(root, &LABEL);

    assert_eq!(tree.child_index(first), Some(0));
    assert_eq!(tree.child_index(second), Some(1));
    assert_eq!(tree.child_index(root), None);

    tree.swap_children(root, 0, 1);
    assert_eq!(tree.child_index(first), Some(1));
    assert_eq!(tree.child_at(root, 0), Some(second));
    assert_eq!(tree.child_at(root, 2), None);
}

#[test]
fn capabilities_default_to_absent() {
    let mut tree = MemoryTree::new();
    let plain = tree.add(&CONTAINER);
    let aware = tree.add(&BORDERED_PANEL);
    tree.set_brightness(aware, 0.25)
        .set_depth_tag(aware, DepthTag("BorderedPanel"));

    assert_eq!(tree.brightness(plain), None);
    assert_eq!(tree.depth_tag(plain), None);
    assert_eq!(tree.brightness(aware), Some(0.25));
    assert_eq!(tree.depth_tag(aware), Some(DepthTag("BorderedPanel")));
}

#[test]
fn class_and_pseudo_sets_ignore_duplicates() {
    let mut tree = MemoryTree::new();
    let node = tree.add(&BUTTON);
    tree.add_class(node, "warn").add_class(node, "warn");
    tree.set_pseudo(node, "hover");
    assert!(tree.has_class(node, "warn"));
    assert!(tree.has_pseudo(node, "hover"));

    tree.remove_class(node, "warn").clear_pseudo(node, "hover");
    assert!(!tree.has_class(node, "warn"));
    assert!(!tree.has_pseudo(node, "hover"));
}
