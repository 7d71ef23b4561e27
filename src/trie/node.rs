//! Trie node.

/// One level of the bit-trie.
///
/// Each node owns its two children outright. Once `terminal` is set the node
/// is a leaf for every walk, whatever its child slots still hold.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    terminal: bool,
    zero: Option<Box<TrieNode>>,
    one: Option<Box<TrieNode>>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    pub fn has_children(&self) -> bool {
        self.zero.is_some() || self.one.is_some()
    }

    #[inline(always)]
    pub fn child(&self, bit: bool) -> Option<&TrieNode> {
        if bit {
            self.one.as_deref()
        } else {
            self.zero.as_deref()
        }
    }

    /// Child for `bit`, creating a fresh non-terminal node if the slot is
    /// empty. The flag is true when a node was created.
    #[inline(always)]
    pub(crate) fn child_or_insert(&mut self, bit: bool) -> (&mut TrieNode, bool) {
        let slot = if bit { &mut self.one } else { &mut self.zero };
        let created = slot.is_none();
        (&mut **slot.get_or_insert_with(Box::default), created)
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.zero.as_deref().into_iter().chain(self.one.as_deref())
    }
}
