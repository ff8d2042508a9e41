//! Classic combinatorial search, dynamic programming and greedy algorithms,
//! each implemented as a small, self-contained, tested demonstration.
//!
//! The centerpiece is the **bounded path counter**: an exhaustive
//! backtracking count of corner-to-corner Hamiltonian paths on an n×n grid,
//! with four successive pruning refinements that shrink the search space
//! without changing the answer.
//!
//! ## Core idea
//! 1. Walk the grid depth-first with the classic mark/unmark discipline.
//! 2. Select a [`PruningLevel`]; each level adds a guard on top of the
//!    previous one.
//! 3. Compare counts and visit totals across levels: the counts never
//!    move, the work does.
//!
//! ## Quick start
//! ```
//! use backprune::{PathCounter, PruningLevel};
//!
//! let mut counter = PathCounter::new(5, PruningLevel::BlockedSplit).unwrap();
//! let report = counter.run();
//! assert_eq!(report.paths, 104);
//! ```
//!
//! ## Companion modules
//! The rest of the crate is a corpus of textbook algorithms in the same
//! spirit, grouped by technique:
//! - [`search`]: n-queens, permutations, subsets, meet-in-the-middle
//!   subset sum.
//! - [`dp`]: coin change, knapsack reachability, edit distance, longest
//!   increasing subsequence, grid path sums.
//! - [`greedy`]: change making, Huffman compression, interval scheduling,
//!   deadline ordering, deviation minimization.
//!
//! These are ready to use and serve as templates for the techniques they
//! demonstrate.

pub mod builder;
pub mod counter;
pub mod dp;
pub mod greedy;
pub mod grid;
pub mod pruning;
pub mod search;

pub use crate::builder::PathCounterBuilder;
pub use crate::counter::{count_hamiltonian_paths, CounterError, PathCounter, SearchReport};
pub use crate::pruning::PruningLevel;
