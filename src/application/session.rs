//! Highlight session: one tree plus the node currently highlighted on it.

use tracing::{debug, instrument};

use crate::application::input::parse_values;
use crate::application::snapshot::TreeSnapshot;
use crate::application::ApplicationResult;
use crate::domain::path::edges_along;
use crate::domain::{BinaryTree, NodeId, TreeBuilder};

/// What a renderer has to repaint after a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Node that was selected
    pub selected: NodeId,
    /// Root to `selected`, both included
    pub path: Vec<NodeId>,
    /// `(parent, child)` edges along `path`
    pub edges: Vec<(NodeId, NodeId)>,
    /// Previously selected node whose highlight must be reset
    pub previous: Option<NodeId>,
}

impl Highlight {
    pub fn contains(&self, id: NodeId) -> bool {
        self.path.contains(&id)
    }
}

/// Owns the tree of one viewing session.
///
/// Submitting new input replaces the tree and drops the highlight; empty
/// input is rejected and leaves both untouched.
#[derive(Debug)]
pub struct Session {
    tree: BinaryTree,
    builder: TreeBuilder,
    separator: char,
    highlighted: Option<NodeId>,
}

impl Session {
    pub fn new(builder: TreeBuilder, separator: char) -> Self {
        Self {
            tree: BinaryTree::new(),
            builder,
            separator,
            highlighted: None,
        }
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    pub fn highlighted(&self) -> Option<NodeId> {
        self.highlighted
    }

    /// Parse `raw` and rebuild the tree from it. Returns the node count.
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self, raw: &str) -> ApplicationResult<usize> {
        let values = parse_values(raw, self.separator)?;
        self.highlighted = None;
        let count = self.builder.rebuild(&mut self.tree, values);
        debug!("submit: built {} nodes, height {}", count, self.tree.height());
        Ok(count)
    }

    /// Highlight `id` and its ancestors.
    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, id: NodeId) -> ApplicationResult<Highlight> {
        let path = self.tree.ancestor_path(id)?;
        let edges = edges_along(&path);
        let previous = self.highlighted.replace(id);
        Ok(Highlight {
            selected: id,
            path,
            edges,
            previous,
        })
    }

    /// Highlight the node built from the value at `position` of the last input.
    pub fn select_position(&mut self, position: usize) -> ApplicationResult<Highlight> {
        let id = self.tree.node_at(position)?;
        self.select(id)
    }

    /// Current highlight, recomputed from the tree.
    pub fn highlight(&self) -> Option<Highlight> {
        let selected = self.highlighted?;
        let path = self.tree.ancestor_path(selected).ok()?;
        let edges = edges_along(&path);
        Some(Highlight {
            selected,
            path,
            edges,
            previous: None,
        })
    }

    /// Drop the highlight and return the node that had it.
    pub fn reset(&mut self) -> Option<NodeId> {
        self.highlighted.take()
    }

    /// Discard the tree and the highlight.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.highlighted = None;
        self.tree.clear();
    }

    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::capture(&self.tree, self.highlight().as_ref())
    }
}
