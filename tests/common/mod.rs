// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use commutable::problems::Graph;
use commutable::{CommutableSystem, Enumerable, NodeId, Problem, Solution};

/// Walk the whole enumeration tree depth-first and return every emitted
/// solution, roots included.
pub fn collect_solutions<P: Problem>(system: &mut CommutableSystem<P>) -> Vec<Solution> {
    let mut out = Vec::new();
    let mut stack: Vec<Solution> = Vec::new();
    for i in 0..system.max_roots() {
        system.get_root(i, &mut |root| {
            stack.push(root.clone());
            true
        });
        while let Some(node) = stack.pop() {
            system.list_children(&node, &mut |child| {
                stack.push(child.clone());
                true
            });
            out.push(node);
        }
    }
    out
}

/// Emitted node sets with each set sorted and the list itself sorted, for
/// order-insensitive comparison.
pub fn collect_sorted_items<P: Problem>(system: &mut CommutableSystem<P>) -> Vec<Vec<NodeId>> {
    let mut items: Vec<Vec<NodeId>> = collect_solutions(system)
        .into_iter()
        .map(|sol| {
            let mut nodes = sol.nodes;
            nodes.sort_unstable();
            nodes
        })
        .collect();
    items.sort();
    items
}

/// Every maximal clique of `graph`, by exhaustive subset search. Only
/// usable for small graphs; returns sorted node lists in sorted order.
pub fn brute_force_maximal_cliques(graph: &Graph) -> Vec<Vec<NodeId>> {
    let n = graph.len();
    assert!(n <= 16, "brute force is exponential in the node count");
    let is_clique = |members: &[NodeId]| {
        members
            .iter()
            .enumerate()
            .all(|(i, &a)| members[i + 1..].iter().all(|&b| graph.adjacent(a, b)))
    };
    let mut cliques = Vec::new();
    for mask in 1u32..(1 << n) {
        let members: Vec<NodeId> = (0..n as NodeId).filter(|&v| (mask >> v) & 1 != 0).collect();
        if !is_clique(&members) {
            continue;
        }
        let maximal = (0..n as NodeId)
            .filter(|&v| (mask >> v) & 1 == 0)
            .all(|v| !members.iter().all(|&u| graph.adjacent(u, v)));
        if maximal {
            cliques.push(members);
        }
    }
    cliques.sort();
    cliques
}
