// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reverse-search enumeration of commutable set systems.
//!
//! This crate enumerates all maximal solutions of a set-system problem
//! exactly once, without keeping previously-emitted solutions around. The
//! problem supplies a predicate over subsets of a ground set `{0, .., N-1}`
//! and a restricted-problem oracle; the engine organises the solutions into
//! an implicit parent-child tree and walks it lazily.
//!
//! # Architecture
//!
//! Four layers, consumed bottom-up:
//!
//! 1. **Problem interface** ([`problem::Problem`]): the predicate,
//!    the restricted-problem oracle, candidate streams, seed tests and
//!    auxiliary state hooks. Defaults cover everything except the predicate
//!    and the oracle.
//! 2. **Candidate queue** ([`candidates::CandidateQueue`]): merges one lazy
//!    candidate stream per solution element into a `(level, node)`-ordered
//!    supply.
//! 3. **Completion engine** (`CommutableSystem::complete` and friends):
//!    deterministically extends a partial solution to the canonical
//!    solution containing it, with guards for seed changes, target sets and
//!    early-discovery bounds.
//! 4. **Tree walker** (`CommutableSystem::root` / `children`): determines
//!    roots and generates children through the restricted-problem oracle,
//!    filtered so that every solution has exactly one parent.
//!
//! The whole engine is synchronous and single-threaded; for parallel
//! enumeration, partition the root range across independent engines.
//!
//! # Example
//!
//! Enumerate the maximal cliques of a path:
//!
//! ```
//! use commutable::enumerate::enumerate_all;
//! use commutable::problems::{Graph, MaximalCliques};
//! use commutable::system::CommutableSystem;
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
//! let mut system = CommutableSystem::new(MaximalCliques::new(graph));
//!
//! let mut cliques = Vec::new();
//! enumerate_all(&mut system, &mut |mut clique| {
//!     clique.sort_unstable();
//!     cliques.push(clique);
//!     true
//! });
//! cliques.sort();
//!
//! assert_eq!(cliques, vec![vec![0, 1], vec![1, 2]]);
//! ```

pub mod candidates;
pub mod enumerate;
pub mod problem;
pub mod problems;
pub mod solution;
pub mod stats;
pub mod system;

// Re-export commonly used types
pub use enumerate::{enumerate_all, Enumerable};
pub use problem::Problem;
pub use solution::{Level, NodeId, Solution};
pub use system::CommutableSystem;
