//! Ancestor paths for highlighting.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::arena::{BinaryTree, NodeId};
use crate::domain::error::{DomainError, TreeResult};

impl BinaryTree {
    /// Nodes from the root down to `id`, both included.
    ///
    /// Never empty for a live handle; errors only when `id` is stale or
    /// belongs to another tree.
    #[instrument(level = "debug", skip(self))]
    pub fn ancestor_path(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let mut path = VecDeque::new();
        let mut current = Some(id);
        while let Some(current_id) = current {
            let node = self
                .get_node(current_id)
                .ok_or(DomainError::NodeNotFound(current_id))?;
            path.push_front(current_id);
            current = node.parent();
        }
        Ok(path.into())
    }

    /// `(parent, child)` pairs along the ancestor path, root edge first.
    pub fn path_edges(&self, id: NodeId) -> TreeResult<Vec<(NodeId, NodeId)>> {
        Ok(edges_along(&self.ancestor_path(id)?))
    }

    /// Edges between the root and `id`.
    pub fn depth_of(&self, id: NodeId) -> TreeResult<usize> {
        Ok(self.ancestor_path(id)?.len() - 1)
    }
}

/// Consecutive `(parent, child)` pairs of a root-first path.
pub fn edges_along(path: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    path.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
