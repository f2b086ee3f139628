// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Completion engine.
//!
//! Completion extends a non-empty partial solution to the unique maximal
//! canonical solution reachable by greedy admission in `(level, node)`
//! order. The walker drives it in four modes: plain (roots), guarded
//! against seed changes and early discovery (forward child completion),
//! restricted to a target set (parent check), and restricted to a ground
//! set (sibling disambiguation).
//!
//! A falsy result is expected control flow, not an error: the tree walker
//! consumes failed completions as filtered child attempts. Passing an empty
//! solution is a programmer error and panics.

use std::collections::HashSet;

use super::CommutableSystem;
use crate::candidates::CandidateQueue;
use crate::problem::Problem;
use crate::solution::{Level, NodeId, Solution};
use crate::stats::Counters;

impl<P: Problem> CommutableSystem<P> {
    /// Extend `sol` to its canonical completion. Returns false if a guard
    /// fired; `sol` is then in an unspecified but discardable state.
    ///
    /// * `ground` restricts candidate streams to a set (which must contain
    ///   `sol`).
    /// * `target`: inserting any node outside it fails the completion.
    /// * `fail_on_seed_change`: admitting a node below the current seed
    ///   fails instead of restarting from the new seed.
    /// * `fail_if_smaller_than`: admitting a node whose `(level, node)` key
    ///   is below the bound fails; used to detect completions that would
    ///   have been discovered earlier in the enumeration.
    ///
    /// # Panics
    ///
    /// Panics if `sol` is empty.
    pub fn complete(
        &mut self,
        sol: &mut Solution,
        ground: Option<&[NodeId]>,
        target: Option<&[NodeId]>,
        fail_on_seed_change: bool,
        fail_if_smaller_than: Option<(Level, NodeId)>,
    ) -> bool {
        assert!(!sol.is_empty(), "complete called on an empty solution");
        let target_set: Option<HashSet<NodeId>> =
            target.map(|t| t.iter().copied().collect());
        loop {
            self.statistics.increment(Counters::CompletionPasses);
            let mut aux = self.problem.init_aux(&sol.nodes);
            let mut queue = CandidateQueue::new(&self.problem, ground);
            queue.add(sol.nodes[0], 0);
            let mut next_in_s = 1;
            let mut seed_changed = false;
            loop {
                let Some((next, next_level)) = queue.next(&sol.nodes, &mut aux) else {
                    break;
                };
                if next_in_s >= sol.len() || next != sol.nodes[next_in_s] {
                    if let Some(ts) = &target_set {
                        if !ts.contains(&next) {
                            return false;
                        }
                    }
                    if let Some(bound) = fail_if_smaller_than {
                        if (next_level, next) < bound {
                            return false;
                        }
                    }
                    sol.push(next, next_level);
                    self.problem.update_aux(&mut aux, &sol.nodes, sol.len() - 1);
                    if next < sol.nodes[0] {
                        if fail_on_seed_change || fail_if_smaller_than.is_some() {
                            return false;
                        }
                        seed_changed = true;
                        break;
                    }
                } else {
                    next_in_s += 1;
                }
                queue.add(next, next_level);
            }
            if seed_changed {
                // The new seed is the node just admitted, which is below
                // every other element. Rebuild levels from it, then rerun
                // the pass; the seed strictly decreases, so this terminates.
                self.statistics.increment(Counters::SeedChanges);
                let seed = sol.min_node();
                self.rebuild(sol, seed);
                continue;
            }
            sol.sort_tail();
            return true;
        }
    }

    /// Completion restricted to the node set `inside`.
    ///
    /// Unlike [`CommutableSystem::complete`], every current element feeds
    /// the queue from the start and insertions land at their canonical
    /// `(level, node)` position, so the solution stays ordered throughout.
    /// There is no failure mode; with `change_seed` false the seed of `sol`
    /// stays in place even if a smaller node is admitted.
    ///
    /// # Panics
    ///
    /// Panics if `sol` is empty.
    pub fn complete_inside(&mut self, sol: &mut Solution, inside: &[NodeId], change_seed: bool) {
        assert!(!sol.is_empty(), "complete_inside called on an empty solution");
        loop {
            self.statistics.increment(Counters::CompletionPasses);
            let mut aux = self.problem.init_aux(&sol.nodes);
            let mut queue = CandidateQueue::new(&self.problem, Some(inside));
            for i in 0..sol.len() {
                queue.add(sol.nodes[i], sol.levels[i]);
            }
            let mut seed_changed = false;
            while let Some((next, level)) = queue.next(&sol.nodes, &mut aux) {
                let pos = sol.insert_sorted(next, level);
                self.problem.update_aux(&mut aux, &sol.nodes, pos);
                if change_seed && next < sol.nodes[0] {
                    seed_changed = true;
                    break;
                }
                queue.add(next, level);
            }
            if seed_changed {
                self.statistics.increment(Counters::SeedChanges);
                let seed = sol.min_node();
                self.rebuild(sol, seed);
                continue;
            }
            return;
        }
    }

    /// Recompute the canonical order of `sol` for the given seed.
    ///
    /// When the seed is already in front and the level vector is intact, a
    /// stable tail sort suffices. Otherwise (a new seed, or a bare node set
    /// whose levels are stale or missing) both the order and the levels are
    /// rebuilt by re-running completion from `seed` inside the node set.
    pub fn resort(&mut self, sol: &mut Solution, seed: NodeId) {
        if sol.levels.len() == sol.nodes.len() && sol.nodes.first() == Some(&seed) {
            sol.sort_tail();
        } else {
            self.rebuild(sol, seed);
        }
    }

    /// Rebuild `sol` as the completion of `{seed}` inside its own node set,
    /// recomputing every level. Members the predicate no longer admits in
    /// that order are dropped.
    pub(crate) fn rebuild(&mut self, sol: &mut Solution, seed: NodeId) {
        let members = std::mem::take(&mut sol.nodes);
        debug_assert!(members.contains(&seed), "rebuild seed not in solution");
        let mut rebuilt = Solution::singleton(seed);
        self.complete_inside(&mut rebuilt, &members, false);
        *sol = rebuilt;
    }
}
