//! Bit-trie storage and lookup.
//!
//! - [`PrefixTrie`] - insert prefixes and test addresses for containment
//! - [`TrieNode`] - a single owned node of the trie

mod node;
mod prefix_trie;

pub use node::TrieNode;
pub use prefix_trie::PrefixTrie;
