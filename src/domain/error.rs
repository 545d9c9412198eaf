//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Domain errors represent misuse of tree handles.
/// A well-formed tree never produces them on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("no node at position {position} (tree has {len} nodes)")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
