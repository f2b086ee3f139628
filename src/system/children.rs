// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tree walker: child generation.
//!
//! Children of a solution `s` are proposed by the restricted-problem oracle
//! and confirmed by a chain of filters. The oracle may return supersets,
//! several sibling solutions, or solutions whose canonical parent is a
//! different solution entirely; the filters are what make every solution
//! the child of exactly one parent, so the enumeration emits no duplicates.
//!
//! Per attempt the walker runs, in order: prefix extraction, the
//! correct-seed filter, the guarded forward completion, the core-prefix
//! check, the parent check, and (for oracles that can return more than one
//! solution) the restricted-uniqueness check. Every failure is a silent
//! skip; only panics from a misbehaving problem implementation escape.

use super::CommutableSystem;
use crate::problem::Problem;
use crate::solution::{NodeId, Solution};
use crate::stats::Counters;

impl<P: Problem> CommutableSystem<P> {
    /// Enumerate the children of `node`, invoking `cb` for each.
    ///
    /// Returns false iff `cb` returned false; the stop propagates through
    /// every loop level immediately, so `cb` is never called again after
    /// declining.
    pub fn children(&mut self, node: &Solution, cb: &mut dyn FnMut(&Solution) -> bool) -> bool {
        let s: &[NodeId] = &node.nodes;

        let mut cands: Vec<NodeId> = Vec::new();
        self.problem
            .restricted_cands(s, &node.levels, &mut |v| {
                cands.push(v);
                true
            });

        for cand in cands {
            let mut sols: Vec<Vec<NodeId>> = Vec::new();
            self.problem.restricted_problem(s, cand, &mut |sol| {
                sols.push(sol);
                true
            });
            for sol in sols {
                for seed in self.valid_seeds(&sol, cand) {
                    self.statistics.increment(Counters::ChildAttempts);
                    let Some(core) = self.prefix(&sol, seed, cand) else {
                        // The oracle produced a solution whose completion
                        // inside itself never reaches the boundary element.
                        self.statistics.increment(Counters::WrongSeedSkips);
                        continue;
                    };
                    // Finding the solution from a wrong seed.
                    if core.min_node() != seed {
                        self.statistics.increment(Counters::WrongSeedSkips);
                        continue;
                    }
                    // A completion below this bound would have been
                    // discovered from an earlier boundary element.
                    let mut child = core.clone();
                    let bound = core.last_key();
                    if !self.complete(&mut child, None, None, true, Some(bound)) {
                        self.statistics
                            .increment(Counters::ForwardCompletionSkips);
                        continue;
                    }
                    if child.nodes[..core.len()] != core.nodes[..] {
                        self.statistics.increment(Counters::CorePrefixSkips);
                        continue;
                    }
                    // Parent check: the core without its boundary element
                    // must complete back to s, never leaving it.
                    let mut parent = core.clone();
                    parent.pop();
                    if !self.complete(&mut parent, None, Some(s), false, None) {
                        self.statistics.increment(Counters::ParentCheckSkips);
                        continue;
                    }
                    if self.problem.restr_multiple() {
                        // Among several restricted solutions, only the one
                        // the parent's own ground reproduces is canonical.
                        let mut ground = parent.nodes.clone();
                        ground.push(cand);
                        let mut restricted = core.clone();
                        if !self.complete(
                            &mut restricted,
                            Some(ground.as_slice()),
                            Some(sol.as_slice()),
                            false,
                            None,
                        ) {
                            self.statistics
                                .increment(Counters::RestrictedCheckSkips);
                            continue;
                        }
                    }
                    self.statistics.increment(Counters::ChildrenEmitted);
                    if !cb(&child) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Seeds of `sol` that may root a child discovered through `cand`: the
    /// problem must accept them, and `cand` must be strictly greater.
    fn valid_seeds(&self, sol: &[NodeId], cand: NodeId) -> Vec<NodeId> {
        sol.iter()
            .copied()
            .filter(|&seed| seed < cand && self.problem.is_seed(seed, Some(sol)))
            .collect()
    }

    /// The prefix of `sol`'s canonical form under `seed`, truncated at
    /// `cand` inclusive, or `None` if the resort never admits `cand`.
    fn prefix(&mut self, sol: &[NodeId], seed: NodeId, cand: NodeId) -> Option<Solution> {
        let mut core = Solution::singleton(seed);
        self.complete_inside(&mut core, sol, false);
        let pos = core.nodes.iter().position(|&n| n == cand)?;
        core.truncate(pos + 1);
        Some(core)
    }
}
