//! Parse error types.

/// Errors raised while turning address or prefix text into bits.
///
/// The trie operations themselves never fail; everything that can go wrong
/// is caught here, before a value reaches [`crate::trie::PrefixTrie`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix notation: {0}")]
    InvalidPrefixNotation(String),
}
