//! Property tests for tree construction and ancestor paths

use proptest::prelude::*;

use randtree::application::{parse_values, DEFAULT_SEPARATOR};
use randtree::domain::{BinaryTree, TreeBuilder};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i32..1000).prop_map(|n| n.to_string()),
        "[a-z]{1,4}",
        Just("7".to_string()),
    ]
}

fn reachable_count(tree: &BinaryTree) -> usize {
    tree.iter().count()
}

proptest! {
    #[test]
    fn node_count_equals_input_length(
        values in proptest::collection::vec(token(), 0..128),
        seed in any::<u64>(),
    ) {
        let tree = TreeBuilder::seeded(seed).build(values.clone());

        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(reachable_count(&tree), values.len());
        prop_assert_eq!(tree.is_empty(), values.is_empty());
    }

    #[test]
    fn every_child_sits_in_exactly_one_parent_slot(
        values in proptest::collection::vec(token(), 1..128),
        seed in any::<u64>(),
    ) {
        let tree = TreeBuilder::seeded(seed).build(values);

        for (id, node) in tree.iter() {
            match node.parent() {
                None => prop_assert_eq!(Some(id), tree.root()),
                Some(parent_id) => {
                    let parent = tree.get_node(parent_id).unwrap();
                    let in_left = parent.left() == Some(id);
                    let in_right = parent.right() == Some(id);
                    prop_assert!(in_left ^ in_right, "child must occupy exactly one slot");
                }
            }
        }
    }

    #[test]
    fn ancestor_path_runs_from_root_to_node(
        values in proptest::collection::vec(token(), 1..96),
        seed in any::<u64>(),
    ) {
        let tree = TreeBuilder::seeded(seed).build(values);
        let root = tree.root().unwrap();

        for &id in tree.insertion_order() {
            let path = tree.ancestor_path(id).unwrap();
            prop_assert_eq!(path[0], root);
            prop_assert_eq!(*path.last().unwrap(), id);
            prop_assert_eq!(path.len(), tree.depth_of(id).unwrap() + 1);
            for pair in path.windows(2) {
                prop_assert_eq!(tree.get_node(pair[1]).unwrap().parent(), Some(pair[0]));
            }
            prop_assert_eq!(tree.ancestor_path(id).unwrap(), path);
        }
    }

    #[test]
    fn rebuild_leaves_nothing_of_the_previous_tree(
        first in proptest::collection::vec(token(), 1..64),
        second in proptest::collection::vec(token(), 1..64),
        seed in any::<u64>(),
    ) {
        let mut builder = TreeBuilder::seeded(seed);
        let mut tree = builder.build(first);
        let old_ids = tree.insertion_order().to_vec();

        let count = builder.rebuild(&mut tree, second.clone());

        prop_assert_eq!(count, second.len());
        prop_assert_eq!(reachable_count(&tree), second.len());
        for (id, _) in tree.iter() {
            prop_assert!(!old_ids.contains(&id));
        }
    }

    #[test]
    fn parsed_input_never_contains_empty_tokens(raw in "[0-9a-z,]{0,40}") {
        match parse_values(&raw, DEFAULT_SEPARATOR) {
            Ok(values) => {
                prop_assert!(!values.is_empty());
                prop_assert!(values.iter().all(|v| !v.is_empty() && !v.contains(',')));
            }
            Err(_) => prop_assert!(raw.split(',').all(str::is_empty)),
        }
    }
}
