//! Prefix lists loaded from JSON files.
//!
//! A list file looks like:
//! ```json
//! { "name": "office", "config": { "exhausted": "reject" }, "prefixes": ["10.0.0.0/8"] }
//! ```
//! Only `prefixes` is required.

use crate::config::MatchConfig;
use crate::models::NetworkPrefix;
use crate::trie::PrefixTrie;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// A named set of prefixes, as stored on disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PrefixList {
    /// Label used in log output.
    #[serde(default)]
    pub name: Option<String>,
    /// Overrides the caller's match config when present.
    #[serde(default)]
    pub config: Option<MatchConfig>,
    pub prefixes: Vec<NetworkPrefix>,
}

impl PrefixList {
    /// Build a trie holding every prefix in the list.
    ///
    /// `default_config` is used unless the list carries its own.
    pub fn to_trie(&self, default_config: MatchConfig) -> PrefixTrie {
        let config = self.config.unwrap_or(default_config);
        let mut trie = PrefixTrie::with_config(config);
        trie.extend(self.prefixes.iter().copied());
        log::info!(
            "Built trie '{}' from {} prefixes: {} effective, {} nodes",
            self.name.as_deref().unwrap_or("unnamed"),
            self.prefixes.len(),
            trie.prefix_count(),
            trie.node_count()
        );
        trie
    }
}

/// Read a [`PrefixList`] from a JSON file.
///
/// # Returns
/// * `Ok(PrefixList)` - The parsed list
/// * `Err` - If the file is missing, unreadable, or holds invalid JSON or prefixes
pub fn read_prefix_list(path: &str) -> Result<PrefixList, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Prefix list file does not exist: {path}").into());
    }
    log::info!("Reading prefix list: {path}");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading prefix list {path}: {e}"))?;
    let list: PrefixList = serde_json::from_str(&json)
        .map_err(|e| format!("Error parsing prefix list {path}: {e}"))?;
    if list.prefixes.is_empty() {
        log::warn!("Prefix list {path} is empty, the trie will match nothing");
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExhaustedPolicy;
    use crate::models::parse_address;

    #[test]
    fn test_read_prefix_list_01() {
        let list = read_prefix_list("tests/test_data/prefix_list_01.json")
            .expect("Error reading prefix list");
        assert_eq!(list.name.as_deref(), Some("private-ranges"));
        assert_eq!(list.prefixes.len(), 4);
        assert!(list.config.is_none());

        let trie = list.to_trie(MatchConfig::default());
        assert_eq!(trie.prefix_count(), 4);
        assert!(trie.matches(&parse_address("10.200.1.1").unwrap()));
        assert!(trie.matches(&parse_address("172.20.0.1").unwrap()));
        assert!(trie.matches(&parse_address("192.168.10.10").unwrap()));
        assert!(trie.matches(&parse_address("fd99::1").unwrap()));
        assert!(!trie.matches(&parse_address("8.8.8.8").unwrap()));
    }

    #[test]
    fn test_read_prefix_list_config_override() {
        let list = read_prefix_list("tests/test_data/prefix_list_02.json")
            .expect("Error reading prefix list");
        assert_eq!(
            list.config.map(|c| c.exhausted),
            Some(ExhaustedPolicy::Reject)
        );
        let trie = list.to_trie(MatchConfig::default());
        assert_eq!(trie.config().exhausted, ExhaustedPolicy::Reject);
        assert!(!trie.matches(&parse_address("253.4.62.66").unwrap()));
    }

    #[test]
    fn test_read_prefix_list_missing_file() {
        let err = read_prefix_list("tests/test_data/does_not_exist.json").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_parse_bad_prefix_in_list() {
        let err = serde_json::from_str::<PrefixList>(r#"{"prefixes": ["10.0.0.0/40"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("prefix length /40 is too long"));
    }

    #[test]
    fn test_minimal_list() {
        let list: PrefixList = serde_json::from_str(r#"{"prefixes": []}"#).unwrap();
        assert_eq!(list, PrefixList::default());
        assert!(list.to_trie(MatchConfig::default()).is_empty());
    }
}
