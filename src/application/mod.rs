//! Application layer: input handling, highlight sessions, renderer snapshots
//!
//! This layer orchestrates domain logic for front ends.

pub mod error;
pub mod input;
pub mod session;
pub mod snapshot;

pub use error::{ApplicationError, ApplicationResult};
pub use input::{parse_values, DEFAULT_SEPARATOR};
pub use session::{Highlight, Session};
pub use snapshot::{HighlightView, NodeView, TreeSnapshot};
