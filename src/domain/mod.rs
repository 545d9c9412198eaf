//! Domain layer: the tree, its builder and ancestor paths
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod path;
pub mod value;

pub use arena::{BinaryTree, NodeId, Side, TreeIterator, TreeNode};
pub use builder::{BranchPicker, RandomPicker, ScriptedPicker, TreeBuilder};
pub use error::{DomainError, TreeResult};
pub use value::{is_numeric, numeric_value};
