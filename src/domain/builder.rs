//! Tree builder placing values by random descent.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{instrument, trace};

use crate::domain::arena::{BinaryTree, NodeId, Side};

/// Source of left/right decisions when both slots of a node are taken.
pub trait BranchPicker {
    fn pick(&mut self) -> Side;
}

/// Fair coin backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl RandomPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomPicker<ChaCha8Rng> {
    /// Same seed, same sequence of sides, on every platform.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> BranchPicker for RandomPicker<R> {
    fn pick(&mut self) -> Side {
        if self.rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Replays a fixed list of sides, wrapping around at the end.
/// An empty script always picks left.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: Vec<Side>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(script: impl Into<Vec<Side>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }
}

impl BranchPicker for ScriptedPicker {
    fn pick(&mut self) -> Side {
        if self.script.is_empty() {
            return Side::Left;
        }
        let side = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        side
    }
}

/// Builds binary trees by inserting values one at a time.
///
/// Each value descends from the root: it takes the first free slot of the
/// visited node (left before right), and when both are taken the picker
/// chooses which child to descend into.
pub struct TreeBuilder {
    picker: Box<dyn BranchPicker>,
}

impl fmt::Debug for TreeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeBuilder").finish_non_exhaustive()
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Builder with an entropy-seeded coin; shapes differ between runs.
    pub fn new() -> Self {
        Self::with_picker(RandomPicker::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_picker(RandomPicker::seeded(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    pub fn with_picker(picker: impl BranchPicker + 'static) -> Self {
        Self {
            picker: Box::new(picker),
        }
    }

    /// Build a fresh tree holding one node per value, in input order.
    #[instrument(level = "debug", skip_all)]
    pub fn build<I, S>(&mut self, values: I) -> BinaryTree
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = BinaryTree::new();
        self.extend(&mut tree, values);
        tree
    }

    /// Clear `tree` and build it again from `values`. Returns the node count.
    #[instrument(level = "debug", skip_all)]
    pub fn rebuild<I, S>(&mut self, tree: &mut BinaryTree, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tree.clear();
        self.extend(tree, values);
        tree.len()
    }

    /// Insert every value into `tree`, in input order.
    pub fn extend<I, S>(&mut self, tree: &mut BinaryTree, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(tree, value);
        }
    }

    /// Insert one value as a new leaf and return its handle.
    ///
    /// Descent is a loop, so deep skewed trees cost time but no stack.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, tree: &mut BinaryTree, value: impl Into<String>) -> NodeId {
        let value = value.into();
        let Some(mut current) = tree.root() else {
            trace!(%value, "insert as root");
            return tree.insert_root(value);
        };

        let mut steps = 0usize;
        loop {
            match tree.child_slots(current) {
                (None, _) => {
                    trace!(%value, steps, parent = %current, "attach left");
                    return tree.attach(current, Side::Left, value);
                }
                (Some(_), None) => {
                    trace!(%value, steps, parent = %current, "attach right");
                    return tree.attach(current, Side::Right, value);
                }
                (Some(left), Some(right)) => {
                    current = match self.picker.pick() {
                        Side::Left => left,
                        Side::Right => right,
                    };
                    steps += 1;
                }
            }
        }
    }
}
