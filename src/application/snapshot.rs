//! Serializable view of a tree for external renderers.
//!
//! Node ids are insertion positions, so they stay meaningful outside the
//! process that built the tree.

use serde::{Deserialize, Serialize};

use crate::application::session::Highlight;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{BinaryTree, NodeId, Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: usize,
    pub value: String,
    /// False for values a renderer should style as hidden
    pub numeric: bool,
    pub depth: usize,
    pub side: Option<Side>,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightView {
    pub selected: usize,
    /// Root first
    pub path: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub root: Option<usize>,
    /// Pre-order, left before right
    pub nodes: Vec<NodeView>,
    pub highlight: Option<HighlightView>,
}

impl TreeSnapshot {
    pub fn capture(tree: &BinaryTree, highlight: Option<&Highlight>) -> Self {
        let position = |id: NodeId| tree.get_node(id).map(|node| node.position());

        let mut nodes = Vec::with_capacity(tree.len());
        let mut stack: Vec<(NodeId, usize)> = tree.root().into_iter().map(|r| (r, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = tree.get_node(id) else {
                continue;
            };
            nodes.push(NodeView {
                id: node.position(),
                value: node.value().to_string(),
                numeric: node.is_numeric(),
                depth,
                side: tree.side_of(id),
                parent: node.parent().and_then(position),
                left: node.left().and_then(position),
                right: node.right().and_then(position),
            });
            stack.extend(node.right().map(|r| (r, depth + 1)));
            stack.extend(node.left().map(|l| (l, depth + 1)));
        }

        let highlight = highlight.and_then(|h| {
            Some(HighlightView {
                selected: position(h.selected)?,
                path: h.path.iter().copied().filter_map(position).collect(),
            })
        });

        Self {
            root: tree.root().and_then(position),
            nodes,
            highlight,
        }
    }

    pub fn node(&self, id: usize) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn to_json(&self) -> ApplicationResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize tree snapshot".to_string(),
            source: Box::new(e),
        })
    }

    pub fn from_json(json: &str) -> ApplicationResult<Self> {
        serde_json::from_str(json).map_err(|e| ApplicationError::OperationFailed {
            context: "parse tree snapshot".to_string(),
            source: Box::new(e),
        })
    }
}
