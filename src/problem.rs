// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem interface for commutable set systems.
//!
//! A problem instance supplies the predicate that distinguishes solutions,
//! the restricted-problem oracle used to propose children, and a handful of
//! auxiliary hooks. Everything except [`Problem::is_good`] and
//! [`Problem::restricted_problem`] has a default, so a simple problem only
//! needs those two methods (plus naming its `Aux` type).
//!
//! # Aux state
//!
//! `Aux` is opaque per-completion state that lets [`Problem::can_add`] run
//! faster than rebuilding the candidate set. One `Aux` lives for one
//! completion pass: created by [`Problem::init_aux`], updated by
//! [`Problem::update_aux`] after every insertion, discarded on reset.
//! [`Problem::update_aux`] always observes the post-insertion solution with
//! the new element at `pos`. Problems that do not need it use `Aux = ()`.

use crate::solution::{Level, NodeId};

/// A commutable set system.
///
/// Implementations must be deterministic: the engine derives canonical
/// solution representatives from the order in which candidates are produced,
/// so every method must return the same answers for the same arguments
/// within one enumeration.
pub trait Problem {
    /// Per-completion auxiliary state consulted by [`Problem::can_add`].
    type Aux: Default;

    /// Size of the ground set; nodes are `0..ground_size`.
    fn ground_size(&self) -> usize;

    /// Whether `s` is a valid (not necessarily maximal) solution.
    fn is_good(&self, s: &[NodeId]) -> bool;

    /// Enumerate the solutions of the restricted subproblem induced by `s`
    /// and the boundary element `v`, each as an unordered node list.
    ///
    /// Only the tree walker calls this. The oracle may be eager; the engine
    /// never assumes laziness here. Emission stops when `cb` returns false.
    fn restricted_problem(&self, s: &[NodeId], v: NodeId, cb: &mut dyn FnMut(Vec<NodeId>) -> bool);

    /// Whether `v` can be appended to `s` while preserving [`Problem::is_good`].
    ///
    /// The default rebuilds `s` with `v` appended and re-tests the predicate.
    /// Implementations are encouraged to answer from `aux` instead.
    fn can_add(&self, s: &[NodeId], _aux: &mut Self::Aux, v: NodeId) -> bool {
        let mut cand = s.to_vec();
        cand.push(v);
        self.is_good(&cand)
    }

    /// Whether the restricted problem may return more than one solution.
    ///
    /// When true, the tree walker runs an extra completion inside the
    /// restricted candidate set to disambiguate siblings.
    fn restr_multiple(&self) -> bool {
        true
    }

    /// Whether `v` may serve as a seed. `s` is `None` when `v` is tested as
    /// a root seed of the whole enumeration, and the containing solution
    /// when `v` is tested as the seed of a specific child.
    fn is_seed(&self, v: NodeId, _s: Option<&[NodeId]>) -> bool {
        self.is_good(&[v])
    }

    /// The `idx`-th candidate of the stream opened by inserting `new_elem`.
    ///
    /// `stream` is the ordinal of the stream within the current completion;
    /// `ground`, when present, restricts candidates to that set. Returns
    /// `None` when the stream is exhausted. Must be stable with respect to
    /// `(new_elem, idx)` within one enumeration.
    fn complete_cand(
        &self,
        ground: Option<&[NodeId]>,
        _new_elem: NodeId,
        _stream: usize,
        idx: usize,
    ) -> Option<NodeId> {
        match ground {
            None => {
                if idx < self.ground_size() {
                    Some(idx as NodeId)
                } else {
                    None
                }
            }
            Some(g) => g.get(idx).copied(),
        }
    }

    /// Callback-style convenience over [`Problem::complete_cand`]: yields
    /// the whole stream opened by `new_elem` until exhaustion or until `cb`
    /// returns false. The engine itself only consumes the numbered form.
    fn complete_cands(
        &self,
        ground: Option<&[NodeId]>,
        new_elem: NodeId,
        stream: usize,
        cb: &mut dyn FnMut(NodeId) -> bool,
    ) {
        let mut idx = 0;
        while let Some(cand) = self.complete_cand(ground, new_elem, stream, idx) {
            if !cb(cand) {
                break;
            }
            idx += 1;
        }
    }

    /// Yield every node outside `s` that is a legal boundary element for
    /// child generation. Order is not significant. Emission stops when `cb`
    /// returns false.
    fn restricted_cands(&self, s: &[NodeId], _levels: &[Level], cb: &mut dyn FnMut(NodeId) -> bool) {
        let mut members = s.to_vec();
        members.sort_unstable();
        for v in 0..self.ground_size() as NodeId {
            if members.binary_search(&v).is_ok() {
                continue;
            }
            if !cb(v) {
                break;
            }
        }
    }

    /// Create the auxiliary state for a completion starting from `s`.
    fn init_aux(&self, _s: &[NodeId]) -> Self::Aux {
        Self::Aux::default()
    }

    /// Update the auxiliary state after an insertion; `s[pos]` is the new
    /// element.
    fn update_aux(&self, _aux: &mut Self::Aux, _s: &[NodeId], _pos: usize) {}
}
