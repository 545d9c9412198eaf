//! Tests for ancestor path lookup

use randtree::domain::{DomainError, NodeId, ScriptedPicker, Side, TreeBuilder};

#[test]
fn given_every_node_when_finding_path_then_path_runs_root_to_node() {
    // Arrange
    let tree = TreeBuilder::seeded(5).build((0..50).map(|i| i.to_string()));
    let root = tree.root().unwrap();

    for &id in tree.insertion_order() {
        // Act
        let path = tree.ancestor_path(id).unwrap();

        // Assert
        assert_eq!(path.first(), Some(&root));
        assert_eq!(path.last(), Some(&id));
        for pair in path.windows(2) {
            let child = tree.get_node(pair[1]).unwrap();
            assert_eq!(child.parent(), Some(pair[0]));
        }
    }
}

#[test]
fn given_deep_node_when_finding_path_then_length_is_depth_plus_one() {
    // Left-only descent: positions 1, 3, 5, ... form the left spine
    let mut builder = TreeBuilder::with_picker(ScriptedPicker::new([Side::Left]));
    let tree = builder.build((0..11).map(|i| i.to_string()));
    let spine: Vec<NodeId> = [0, 1, 3, 5, 7, 9]
        .iter()
        .map(|&p| tree.node_at(p).unwrap())
        .collect();

    let deepest = *spine.last().unwrap();
    let path = tree.ancestor_path(deepest).unwrap();

    assert_eq!(path, spine);
    assert_eq!(tree.depth_of(deepest).unwrap() + 1, path.len());
    assert_eq!(tree.path_edges(deepest).unwrap().len(), 5);
}

#[test]
fn given_same_node_when_finding_path_twice_then_results_match() {
    let tree = TreeBuilder::seeded(8).build((0..20).map(|i| i.to_string()));
    let id = tree.node_at(17).unwrap();

    let first = tree.ancestor_path(id).unwrap();
    let second = tree.ancestor_path(id).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_handle_from_cleared_tree_when_finding_path_then_reports_not_found() {
    let mut builder = TreeBuilder::seeded(2);
    let mut tree = builder.build(["1", "2", "3"]);
    let stale = tree.node_at(2).unwrap();

    tree.clear();

    assert_eq!(
        tree.ancestor_path(stale),
        Err(DomainError::NodeNotFound(stale))
    );
}
