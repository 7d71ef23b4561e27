// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod prefix_list;
pub mod processing;
pub mod trie;

use std::error::Error;

pub use config::{ExhaustedPolicy, MatchConfig};
pub use error::ParseError;
pub use models::{parse_address, parse_prefix, AddressBits, AddressFamily, NetworkPrefix};
pub use prefix_list::{read_prefix_list, PrefixList};
pub use trie::PrefixTrie;

/// Load the entries for a match matrix.
///
/// With a path, reads a [`PrefixList`] JSON file; without one, uses the
/// built-in entries.
pub fn load_entries(path: Option<&str>) -> Result<Vec<NetworkPrefix>, Box<dyn Error>> {
    match path {
        Some(path) => Ok(read_prefix_list(path)?.prefixes),
        None => {
            log::info!("No prefix list given, using built-in entries");
            Ok(processing::parse_entries(&processing::DEFAULT_ENTRIES))
        }
    }
}

/// Build a trie from prefix strings, failing on the first invalid one.
///
/// # Examples
/// ```
/// use cidr_bit_trie::{build_trie, parse_address, MatchConfig};
/// let trie = build_trie(&["10.0.0.0/8", "fd00::/8"], MatchConfig::default()).unwrap();
/// assert!(trie.matches(&parse_address("10.1.2.3").unwrap()));
/// assert!(!trie.matches(&parse_address("11.1.2.3").unwrap()));
/// ```
pub fn build_trie<S: AsRef<str>>(
    prefixes: &[S],
    config: MatchConfig,
) -> Result<PrefixTrie, ParseError> {
    let mut trie = PrefixTrie::with_config(config);
    for prefix in prefixes {
        trie.insert_str(prefix.as_ref())?;
    }
    Ok(trie)
}
