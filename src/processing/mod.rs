//! Trie-driven processing over lists of prefixes.
//!
//! - [`matrix`] - build one trie per prefix and probe it with every entry

mod matrix;

pub use matrix::{match_matrix, parse_entries, MatchBlock, MatchRow, DEFAULT_ENTRIES};
