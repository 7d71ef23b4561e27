//! Binary prefix trie for CIDR containment checks.

use super::node::TrieNode;
use crate::config::MatchConfig;
use crate::error::ParseError;
use crate::models::{parse_address, parse_prefix, AddressBits, NetworkPrefix};

/// A set of prefixes stored as bit paths from the root.
///
/// Prefixes are combined with set-union semantics: the first terminal node on
/// a path answers the lookup, so a shorter prefix absorbs every longer prefix
/// beneath it regardless of insertion order.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    root: TrieNode,
    config: MatchConfig,
    node_count: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::with_config(MatchConfig::default())
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            node_count: 1,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// True until the first prefix is inserted.
    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal() && !self.root.has_children()
    }

    /// True once a `/0` prefix made the root terminal.
    pub fn matches_all(&self) -> bool {
        self.root.is_terminal()
    }

    /// Allocated nodes, root included. Nodes below an absorbing terminal
    /// still count.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of terminal nodes reachable from the root.
    pub fn prefix_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_terminal() {
                count += 1;
            } else {
                stack.extend(node.children());
            }
        }
        count
    }

    /// Record `prefix`, one trie level per significant bit.
    ///
    /// The walk stops early at an existing terminal node, which already
    /// covers everything this prefix would add.
    pub fn insert(&mut self, prefix: NetworkPrefix) {
        let bits = prefix.bits();
        let depth = (prefix.prefix_len() as usize).min(bits.bit_len());

        let mut node = &mut self.root;
        for head_pos in 0..depth {
            if node.is_terminal() {
                log::debug!("insert {prefix}: absorbed at depth {head_pos}");
                return;
            }
            let (child, created) = node.child_or_insert(bits.bit_at(head_pos));
            if created {
                self.node_count += 1;
            }
            node = child;
        }

        if node.is_terminal() {
            log::debug!("insert {prefix}: already present");
        } else {
            log::debug!("insert {prefix}: terminal at depth {depth}");
            node.set_terminal();
        }
    }

    /// True when some inserted prefix covers `address`.
    ///
    /// When `address` runs out of bits before a terminal node or a mismatch
    /// is reached (a short IPv4 probe against IPv6 prefixes), the answer
    /// comes from [`MatchConfig::exhausted`].
    pub fn matches(&self, address: &AddressBits) -> bool {
        let bit_len = address.bit_len();
        let mut node = &self.root;
        let mut head_pos = 0;
        loop {
            if node.is_terminal() {
                return true;
            }
            if head_pos >= bit_len {
                log::trace!("matches {address}: bits exhausted, {}", self.config.exhausted);
                return self.config.exhausted.matches_when_exhausted();
            }
            match node.child(address.bit_at(head_pos)) {
                Some(child) => {
                    node = child;
                    head_pos += 1;
                }
                None => {
                    log::trace!("matches {address}: no branch at bit {head_pos}");
                    return false;
                }
            }
        }
    }

    /// Parse `text` as `address/length` and insert it.
    pub fn insert_str(&mut self, text: &str) -> Result<(), ParseError> {
        self.insert(parse_prefix(text)?);
        Ok(())
    }

    /// Parse `text` as an address (an optional `/n` suffix is ignored) and
    /// look it up.
    pub fn matches_str(&self, text: &str) -> Result<bool, ParseError> {
        Ok(self.matches(&parse_address(text)?))
    }
}

impl Extend<NetworkPrefix> for PrefixTrie {
    fn extend<I: IntoIterator<Item = NetworkPrefix>>(&mut self, iter: I) {
        for prefix in iter {
            self.insert(prefix);
        }
    }
}

impl FromIterator<NetworkPrefix> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = NetworkPrefix>>(iter: I) -> Self {
        let mut trie = PrefixTrie::new();
        trie.extend(iter);
        trie
    }
}
