use std::fmt;

use generational_arena::{Arena, Index};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::value::is_numeric;

/// Handle to a node in a [`BinaryTree`].
///
/// Handles go stale when the tree is cleared: lookups with a stale handle
/// return `None` instead of reaching a node of the next build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}@{}", slot, generation)
    }
}

/// Child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "L"),
            Side::Right => write!(f, "R"),
        }
    }
}

/// Tree node holding one input token.
#[derive(Debug)]
pub struct TreeNode {
    value: String,
    /// Position of the value in the build input
    position: usize,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl TreeNode {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.left.into_iter().chain(self.right)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Renderers hide values that fail this check.
    pub fn is_numeric(&self) -> bool {
        is_numeric(&self.value)
    }
}

/// Arena-backed binary tree.
///
/// Nodes are only ever added as leaves, and removed all at once by [`clear`](Self::clear).
#[derive(Debug)]
pub struct BinaryTree {
    arena: Arena<TreeNode>,
    root: Option<NodeId>,
    /// Node handles in insertion order
    order: Vec<NodeId>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            order: Vec::new(),
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.arena.get(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    /// Value stored at `id`, if the handle is live.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.get_node(id).map(TreeNode::value)
    }

    /// Node created for the value at `position` of the build input.
    pub fn node_at(&self, position: usize) -> TreeResult<NodeId> {
        self.order
            .get(position)
            .copied()
            .ok_or(DomainError::PositionOutOfRange {
                position,
                len: self.order.len(),
            })
    }

    /// Node handles in insertion order.
    pub fn insertion_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Which slot of its parent `id` occupies; `None` for the root or a stale handle.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.get_node(self.get_node(id)?.parent?)?;
        if parent.left == Some(id) {
            Some(Side::Left)
        } else if parent.right == Some(id) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Drop every node. Handles from before the call go stale.
    #[instrument(level = "debug", skip(self), fields(len = self.len()))]
    pub fn clear(&mut self) {
        // remove() retires the slot's generation
        for id in self.order.drain(..) {
            self.arena.remove(id.0);
        }
        self.root = None;
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone root.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.into_iter().map(|r| (r, 1)).collect();
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            if let Some(node) = self.get_node(id) {
                stack.extend(node.children().map(|child| (child, level + 1)));
            }
        }
        height
    }

    /// Leaf handles in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
            .collect()
    }

    pub(crate) fn insert_root(&mut self, value: String) -> NodeId {
        debug_assert!(self.root.is_none(), "root already set");
        let id = self.push_node(value, None);
        self.root = Some(id);
        id
    }

    /// Attach a new leaf in the empty `side` slot of `parent`.
    ///
    /// `parent` must be a live handle of this tree.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, value: String) -> NodeId {
        debug_assert!(self.arena[parent.0].child(side).is_none(), "slot taken");
        let id = self.push_node(value, Some(parent));
        let parent_node = &mut self.arena[parent.0];
        match side {
            Side::Left => parent_node.left = Some(id),
            Side::Right => parent_node.right = Some(id),
        }
        id
    }

    /// Left and right slots of `id`, which must be a live handle of this tree.
    pub(crate) fn child_slots(&self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = &self.arena[id.0];
        (node.left, node.right)
    }

    fn push_node(&mut self, value: String, parent: Option<NodeId>) -> NodeId {
        let node = TreeNode {
            value,
            position: self.order.len(),
            parent,
            left: None,
            right: None,
        };
        let id = NodeId(self.arena.insert(node));
        self.order.push(id);
        id
    }
}

/// Pre-order traversal, left subtree before right.
pub struct TreeIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<NodeId>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current) {
                // Right first so left pops first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (BinaryTree, [NodeId; 4]) {
        //      a
        //     / \
        //    b   c
        //   /
        //  d
        let mut tree = BinaryTree::new();
        let a = tree.insert_root("a".into());
        let b = tree.attach(a, Side::Left, "b".into());
        let c = tree.attach(a, Side::Right, "c".into());
        let d = tree.attach(b, Side::Left, "d".into());
        (tree, [a, b, c, d])
    }

    #[test]
    fn given_empty_tree_when_querying_then_has_no_root() {
        let tree = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn given_attached_children_when_reading_links_then_parent_and_child_agree() {
        let (tree, [a, b, c, d]) = sample();

        assert_eq!(tree.root(), Some(a));
        assert_eq!(tree.child_slots(a), (Some(b), Some(c)));
        assert_eq!(tree.get_node(d).unwrap().parent(), Some(b));
        assert_eq!(tree.side_of(b), Some(Side::Left));
        assert_eq!(tree.side_of(c), Some(Side::Right));
        assert_eq!(tree.side_of(a), None);
    }

    #[test]
    fn given_tree_when_iterating_then_visits_pre_order() {
        let (tree, _) = sample();
        let values: Vec<_> = tree.iter().map(|(_, n)| n.value().to_string()).collect();
        assert_eq!(values, ["a", "b", "d", "c"]);
    }

    #[test]
    fn given_tree_when_measuring_then_reports_height_and_leaves() {
        let (tree, [_, _, c, d]) = sample();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.leaf_nodes(), vec![d, c]);
    }

    #[test]
    fn given_tree_when_looking_up_positions_then_follows_insertion_order() {
        let (tree, [a, _, c, _]) = sample();
        assert_eq!(tree.node_at(0), Ok(a));
        assert_eq!(tree.node_at(2), Ok(c));
        assert_eq!(
            tree.node_at(4),
            Err(DomainError::PositionOutOfRange { position: 4, len: 4 })
        );
    }

    #[test]
    fn given_cleared_tree_when_using_old_handles_then_they_are_stale() {
        let (mut tree, [a, b, _, _]) = sample();

        tree.clear();
        let fresh = tree.insert_root("z".into());

        assert!(!tree.contains(a));
        assert!(tree.get_node(b).is_none());
        assert_ne!(fresh, a);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.value(fresh), Some("z"));
    }
}
