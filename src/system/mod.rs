// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The commutable-system enumeration engine.
//!
//! [`CommutableSystem`] wraps a [`Problem`] and walks an implicit
//! parent-child tree over its solutions: every solution is emitted exactly
//! once, either as a root (a seed whose completion keeps it as seed) or as
//! a child produced by the restricted-problem oracle and confirmed by the
//! parent checks.
//!
//! # Architecture
//!
//! The engine is built from three layers:
//!
//! 1. **Candidate queue** (`crate::candidates`): merges per-element
//!    candidate streams in `(level, node)` order.
//! 2. **Completion engine** (`complete`): deterministically extends a
//!    partial solution to the canonical solution containing it, with
//!    optional target/bound/seed-change guards.
//! 3. **Tree walker** (`children` plus the root scan here): turns
//!    completion into a duplicate-free enumeration tree.
//!
//! All of it is synchronous and single-threaded; control leaves the engine
//! only through the emission callbacks, whose boolean return cancels the
//! walk cooperatively.

pub mod children;
pub mod complete;

use crate::enumerate::Enumerable;
use crate::problem::Problem;
use crate::solution::{NodeId, Solution};
use crate::stats::{Counters, Statistics};

/// Enumeration engine over one problem instance.
///
/// The engine owns mutable scratch state (statistics, and transiently the
/// working solution of each completion), so its operations take `&mut self`.
/// Callers wanting parallelism partition roots across independent engines.
pub struct CommutableSystem<P: Problem> {
    problem: P,
    statistics: Statistics,
}

impl<P: Problem> CommutableSystem<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            statistics: Statistics::new(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The canonical solution rooted at seed `i`, if `i` is a root.
    ///
    /// `i` is a root iff the problem accepts it as a root seed and the
    /// completion of `{i}` finishes without a seed change; the root is that
    /// completion.
    pub fn root(&mut self, i: NodeId) -> Option<Solution> {
        if !self.problem.is_seed(i, None) {
            return None;
        }
        let mut root = Solution::singleton(i);
        if !self.complete(&mut root, None, None, true, None) {
            return None;
        }
        self.statistics.increment(Counters::RootsEmitted);
        Some(root)
    }
}

impl<P: Problem> Enumerable for CommutableSystem<P> {
    type Node = Solution;
    type Item = Vec<NodeId>;

    fn max_roots(&self) -> usize {
        self.problem.ground_size()
    }

    fn get_root(&mut self, i: usize, cb: &mut dyn FnMut(&Solution) -> bool) {
        if let Some(root) = self.root(i as NodeId) {
            cb(&root);
        }
    }

    fn list_children(&mut self, node: &Solution, cb: &mut dyn FnMut(&Solution) -> bool) {
        self.children(node, cb);
    }

    fn node_to_item(&self, node: &Solution) -> Vec<NodeId> {
        node.nodes.clone()
    }
}
