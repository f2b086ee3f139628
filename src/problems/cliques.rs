// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximal-clique enumeration problem.
//!
//! The flagship instance: solutions are cliques of an undirected graph,
//! maximal solutions are maximal cliques. The auxiliary state caches the
//! common neighbourhood of the growing clique, making `can_add` a single
//! bitset probe instead of a rebuild. Candidate streams follow adjacency:
//! inserting a node opens a stream over its neighbour list, so completion
//! only ever looks at nodes that can still matter.
//!
//! The restricted problem for a clique `s` and boundary node `v` starts
//! from the base clique `(s ∩ N(v)) ∪ {v}` and extends it greedily inside
//! its common neighbourhood, smallest node first, the same admission order
//! the completion engine uses. That yields exactly one solution per
//! boundary node, so `restr_multiple` is false and the walker can skip the
//! sibling-disambiguation completion. The parent check takes care of
//! solutions whose canonical parent is a different clique.

use crate::problem::Problem;
use crate::problems::graph::{Graph, NodeSet};
use crate::solution::NodeId;

/// Maximal cliques of an undirected graph.
pub struct MaximalCliques {
    graph: Graph,
}

impl MaximalCliques {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The common neighbourhood of `nodes`: every node adjacent to all of
    /// them. For an empty slice this is the whole ground set.
    fn common_neighborhood(&self, nodes: &[NodeId]) -> NodeSet {
        let mut common = NodeSet::full(self.graph.len());
        for &u in nodes {
            common.intersect_with(self.graph.row(u));
        }
        common
    }
}

impl Problem for MaximalCliques {
    /// Common neighbourhood of the current solution.
    type Aux = NodeSet;

    fn ground_size(&self) -> usize {
        self.graph.len()
    }

    fn is_good(&self, s: &[NodeId]) -> bool {
        for (i, &a) in s.iter().enumerate() {
            for &b in &s[i + 1..] {
                if !self.graph.adjacent(a, b) {
                    return false;
                }
            }
        }
        true
    }

    fn can_add(&self, _s: &[NodeId], aux: &mut NodeSet, v: NodeId) -> bool {
        aux.contains(v)
    }

    fn init_aux(&self, s: &[NodeId]) -> NodeSet {
        self.common_neighborhood(s)
    }

    fn update_aux(&self, aux: &mut NodeSet, s: &[NodeId], pos: usize) {
        aux.intersect_with(self.graph.row(s[pos]));
    }

    fn complete_cand(
        &self,
        ground: Option<&[NodeId]>,
        new_elem: NodeId,
        _stream: usize,
        idx: usize,
    ) -> Option<NodeId> {
        match ground {
            None => self.graph.neighbors(new_elem).get(idx).copied(),
            Some(g) => g.get(idx).copied(),
        }
    }

    fn restr_multiple(&self) -> bool {
        false
    }

    fn restricted_problem(&self, s: &[NodeId], v: NodeId, cb: &mut dyn FnMut(Vec<NodeId>) -> bool) {
        let mut sol: Vec<NodeId> = s
            .iter()
            .copied()
            .filter(|&u| self.graph.adjacent(u, v))
            .collect();
        sol.push(v);
        let mut common = self.common_neighborhood(&sol);
        // Greedy canonical extension, smallest common neighbour first.
        loop {
            let r = match common.iter().next() {
                Some(r) => r,
                None => break,
            };
            sol.push(r);
            common.intersect_with(self.graph.row(r));
        }
        cb(sol);
    }
}
