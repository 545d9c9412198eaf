//! Random-descent binary trees with ancestor path highlighting.
//!
//! Values are inserted one at a time: each new node walks down from the root,
//! takes the first free child slot it meets (left before right), and flips a
//! coin to pick a subtree when both slots are taken. Selecting a node yields
//! its ancestor path, root first, which renderers use for highlighting.
//!
//! ```
//! use randtree::domain::{ScriptedPicker, TreeBuilder};
//!
//! let mut builder = TreeBuilder::with_picker(ScriptedPicker::default());
//! let tree = builder.build(["5", "3", "8"]);
//! let three = tree.node_at(1).unwrap();
//! let path = tree.ancestor_path(three).unwrap();
//! assert_eq!(path, vec![tree.root().unwrap(), three]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
