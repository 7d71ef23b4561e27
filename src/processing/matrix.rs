//! Match matrix: every prefix checked against every entry's address.

use crate::config::MatchConfig;
use crate::models::{parse_prefix, AddressBits, NetworkPrefix};
use crate::trie::PrefixTrie;

/// Built-in entries probed when no list is given.
pub const DEFAULT_ENTRIES: [&str; 5] = [
    "255.255.255.255/16",
    "255.255.255.255/24",
    "127.127.127.1/32",
    "192.168.1.1/24",
    "fd04:3e42:4a4e:3381::/64",
];

/// One probe result inside a [`MatchBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub probe: AddressBits,
    pub is_match: bool,
}

/// Results for a trie built from a single prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBlock {
    pub prefix: NetworkPrefix,
    pub rows: Vec<MatchRow>,
}

impl MatchBlock {
    pub fn match_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_match).count()
    }
}

/// Parse CIDR entries, logging and skipping any that are invalid.
pub fn parse_entries<S: AsRef<str>>(entries: &[S]) -> Vec<NetworkPrefix> {
    entries
        .iter()
        .filter_map(|e| match parse_prefix(e.as_ref()) {
            Ok(prefix) => Some(prefix),
            Err(err) => {
                log::warn!("Skipping entry '{}': {err}", e.as_ref());
                None
            }
        })
        .collect()
}

/// Build a fresh trie from each prefix and probe it with the address of
/// every prefix in the list, in order.
pub fn match_matrix(prefixes: &[NetworkPrefix], config: MatchConfig) -> Vec<MatchBlock> {
    log::info!(
        "#Start match_matrix() {n}x{n} exhausted={exhausted}",
        n = prefixes.len(),
        exhausted = config.exhausted
    );
    prefixes
        .iter()
        .map(|prefix| {
            let mut trie = PrefixTrie::with_config(config);
            trie.insert(*prefix);
            let rows = prefixes
                .iter()
                .map(|probe| MatchRow {
                    probe: *probe.bits(),
                    is_match: trie.matches(probe.bits()),
                })
                .collect();
            MatchBlock {
                prefix: *prefix,
                rows,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_entries_matrix(config: MatchConfig) -> Vec<Vec<bool>> {
        let prefixes = parse_entries(&DEFAULT_ENTRIES);
        match_matrix(&prefixes, config)
            .iter()
            .map(|b| b.rows.iter().map(|r| r.is_match).collect())
            .collect()
    }

    #[test]
    fn test_parse_entries_skips_invalid() {
        let prefixes = parse_entries(&["10.0.0.0/8", "bogus", "10.0.0.1", "::/0"]);
        assert_eq!(prefixes.len(), 2);
        assert_eq!(prefixes[0].to_string(), "10.0.0.0/8");
        assert_eq!(prefixes[1].to_string(), "::/0");
    }

    #[test]
    fn test_default_entries_matrix() {
        let expected = vec![
            // 255.255.255.255/16
            vec![true, true, false, false, false],
            // 255.255.255.255/24
            vec![true, true, false, false, false],
            // 127.127.127.1/32
            vec![false, false, true, false, false],
            // 192.168.1.1/24
            vec![false, false, false, true, false],
            // fd04:3e42:4a4e:3381::/64, v4 probes diverge before bit 32
            vec![false, false, false, false, true],
        ];
        assert_eq!(default_entries_matrix(MatchConfig::default()), expected);
        assert_eq!(default_entries_matrix(MatchConfig::strict()), expected);
    }

    #[test]
    fn test_v6_prefix_probed_by_exhausted_v4() {
        let prefixes = parse_entries(&["fd04:3e42:4a4e:3381::/64", "253.4.62.66/32"]);
        let lenient = match_matrix(&prefixes, MatchConfig::default());
        assert_eq!(lenient[0].match_count(), 2);
        // a /32 prefix walks all of the v6 probe's first 32 bits to a terminal
        assert_eq!(lenient[1].match_count(), 2);

        let strict = match_matrix(&prefixes, MatchConfig::strict());
        assert_eq!(strict[0].match_count(), 1);
        assert_eq!(strict[1].match_count(), 2);
    }

    #[test]
    fn test_empty_list() {
        assert!(match_matrix(&[], MatchConfig::default()).is_empty());
    }
}
