// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end enumeration tests on the maximal-clique problem.
//!
//! These exercise the whole stack (roots, completion, child generation)
//! on graphs small enough to state the expected output exactly:
//! - a triangle (one root, no children)
//! - a path (one root plus one child)
//! - an empty graph (singleton roots only)
//! - a complete graph (a single root)
//! - cancellation mid-enumeration
//! - the degenerate zero- and one-node ground sets

mod common;

use commutable::enumerate::enumerate_all;
use commutable::problems::{Graph, MaximalCliques};
use commutable::{CommutableSystem, Enumerable};

fn system_for(n: usize, edges: &[(u32, u32)]) -> CommutableSystem<MaximalCliques> {
    CommutableSystem::new(MaximalCliques::new(Graph::from_edges(n, edges)))
}

#[test]
fn test_triangle_single_root_no_children() {
    let mut sys = system_for(3, &[(0, 1), (0, 2), (1, 2)]);

    let root = sys.root(0).expect("0 seeds the triangle");
    assert_eq!(root.nodes, vec![0, 1, 2]);
    assert_eq!(root.levels, vec![0, 1, 1]);
    assert!(sys.root(1).is_none());
    assert!(sys.root(2).is_none());

    let mut children = 0;
    sys.children(&root, &mut |_| {
        children += 1;
        true
    });
    assert_eq!(children, 0);

    assert_eq!(common::collect_sorted_items(&mut sys), vec![vec![0, 1, 2]]);
}

#[test]
fn test_path_emits_both_cliques() {
    let mut sys = system_for(3, &[(0, 1), (1, 2)]);
    let items = common::collect_sorted_items(&mut sys);
    assert_eq!(items, vec![vec![0, 1], vec![1, 2]]);
}

#[test]
fn test_path_second_clique_is_child_of_first() {
    let mut sys = system_for(3, &[(0, 1), (1, 2)]);
    let root = sys.root(0).expect("0 seeds {0,1}");
    assert_eq!(root.nodes, vec![0, 1]);

    let mut children = Vec::new();
    sys.children(&root, &mut |c| {
        children.push(c.clone());
        true
    });
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].nodes, vec![1, 2]);
    assert_eq!(children[0].levels, vec![0, 1]);
}

#[test]
fn test_empty_graph_singleton_roots() {
    let mut sys = system_for(4, &[]);
    let items = common::collect_sorted_items(&mut sys);
    assert_eq!(items, vec![vec![0], vec![1], vec![2], vec![3]]);

    // Each singleton is a root with no children.
    for i in 0..4 {
        let root = sys.root(i).expect("isolated node roots itself");
        assert_eq!(root.nodes, vec![i]);
        let mut children = 0;
        sys.children(&root, &mut |_| {
            children += 1;
            true
        });
        assert_eq!(children, 0);
    }
}

#[test]
fn test_complete_graph_single_root() {
    let mut sys = system_for(
        4,
        &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
    );

    let root = sys.root(0).expect("0 seeds K4");
    assert_eq!(root.nodes, vec![0, 1, 2, 3]);
    assert_eq!(root.levels, vec![0, 1, 1, 1]);

    assert_eq!(
        common::collect_sorted_items(&mut sys),
        vec![vec![0, 1, 2, 3]]
    );
}

#[test]
fn test_cancellation_after_first_emission() {
    let mut sys = system_for(
        4,
        &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
    );
    let mut calls = 0;
    let finished = enumerate_all(&mut sys, &mut |_| {
        calls += 1;
        false
    });
    assert!(!finished);
    assert_eq!(calls, 1);
}

#[test]
fn test_cancellation_is_exact_midway() {
    // Four singleton roots; stopping at the second emission must leave the
    // callback invoked exactly twice.
    let mut sys = system_for(4, &[]);
    let mut calls = 0;
    let finished = enumerate_all(&mut sys, &mut |_| {
        calls += 1;
        calls < 2
    });
    assert!(!finished);
    assert_eq!(calls, 2);
}

#[test]
fn test_zero_nodes() {
    let mut sys = system_for(0, &[]);
    assert_eq!(sys.max_roots(), 0);
    let mut calls = 0;
    assert!(enumerate_all(&mut sys, &mut |_| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 0);
}

#[test]
fn test_single_node() {
    let mut sys = system_for(1, &[]);
    assert_eq!(sys.max_roots(), 1);
    let items = common::collect_sorted_items(&mut sys);
    assert_eq!(items, vec![vec![0]]);
}

#[test]
fn test_enumeration_matches_brute_force_on_fixed_graphs() {
    // A few hand-picked shapes: two triangles sharing an edge, a 4-cycle,
    // a star, and a disconnected mix of a triangle and an edge.
    let graphs: Vec<(usize, Vec<(u32, u32)>)> = vec![
        (4, vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]),
        (4, vec![(0, 1), (1, 2), (2, 3), (0, 3)]),
        (5, vec![(0, 1), (0, 2), (0, 3), (0, 4)]),
        (6, vec![(0, 1), (0, 2), (1, 2), (4, 5)]),
        (5, vec![(0, 1), (0, 4), (1, 4), (1, 2), (2, 4)]),
        (5, vec![(0, 1), (1, 2), (1, 3), (2, 3), (1, 4), (2, 4)]),
    ];
    for (n, edges) in graphs {
        let graph = Graph::from_edges(n, &edges);
        let expected = common::brute_force_maximal_cliques(&graph);
        let mut sys = CommutableSystem::new(MaximalCliques::new(graph));
        let items = common::collect_sorted_items(&mut sys);
        assert_eq!(items, expected, "graph on {} nodes: {:?}", n, edges);
    }
}
