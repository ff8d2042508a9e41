//! Greedy-heuristic demonstrations.
//!
//! - [`coin_change`]  : largest-coin-first change making, and where it
//!   fails.
//! - [`huffman`]      : prefix-code compression with a Huffman tree.
//! - [`scheduling`]   : non-overlapping event selection strategies.
//! - [`deadlines`]    : task ordering that maximizes deadline slack.
//! - [`minimize`]     : one-number summaries minimizing deviation sums.

pub mod coin_change;
pub mod deadlines;
pub mod huffman;
pub mod minimize;
pub mod scheduling;
