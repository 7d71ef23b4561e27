//! Match policy configuration.
//!
//! The only knob is what [`crate::trie::PrefixTrie::matches`] answers when a
//! probe runs out of bits before reaching a terminal node. That happens when
//! an IPv4 address is checked against a trie built from longer IPv6 prefixes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`MatchConfig::from_env`].
pub const EXHAUSTED_ENV_VAR: &str = "CIDR_TRIE_EXHAUSTED";

/// Answer given for a probe whose bits are exhausted without a mismatch.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustedPolicy {
    /// Treat the probe as matching.
    #[default]
    Match,
    /// Treat the probe as not matching.
    Reject,
}

impl ExhaustedPolicy {
    pub fn matches_when_exhausted(&self) -> bool {
        matches!(self, ExhaustedPolicy::Match)
    }
}

impl FromStr for ExhaustedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "match" => Ok(ExhaustedPolicy::Match),
            "reject" => Ok(ExhaustedPolicy::Reject),
            other => Err(format!(
                "unknown exhausted policy '{other}', expected 'match' or 'reject'"
            )),
        }
    }
}

impl fmt::Display for ExhaustedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExhaustedPolicy::Match => write!(f, "match"),
            ExhaustedPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Settings applied to every lookup on a trie.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    #[serde(default)]
    pub exhausted: ExhaustedPolicy,
}

impl MatchConfig {
    /// Strict lookups: a probe never matches by running out of bits.
    pub fn strict() -> Self {
        MatchConfig {
            exhausted: ExhaustedPolicy::Reject,
        }
    }

    /// Read the config from the process environment.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file. A missing
    /// variable gives the default config.
    pub fn from_env() -> Result<MatchConfig, Box<dyn Error>> {
        Self::from_var(std::env::var(EXHAUSTED_ENV_VAR).ok().as_deref())
    }

    fn from_var(value: Option<&str>) -> Result<MatchConfig, Box<dyn Error>> {
        let exhausted = match value {
            Some(v) => v
                .parse::<ExhaustedPolicy>()
                .map_err(|e| format!("Invalid {EXHAUSTED_ENV_VAR}: {e}"))?,
            None => ExhaustedPolicy::default(),
        };
        log::debug!("MatchConfig exhausted={exhausted}");
        Ok(MatchConfig { exhausted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_when_exhausted() {
        let config = MatchConfig::default();
        assert_eq!(config.exhausted, ExhaustedPolicy::Match);
        assert!(config.exhausted.matches_when_exhausted());
        assert!(!MatchConfig::strict().exhausted.matches_when_exhausted());
    }

    #[test]
    fn test_from_var() {
        assert_eq!(MatchConfig::from_var(None).unwrap(), MatchConfig::default());
        assert_eq!(
            MatchConfig::from_var(Some(" Reject ")).unwrap(),
            MatchConfig::strict()
        );
        assert_eq!(
            MatchConfig::from_var(Some("MATCH")).unwrap().exhausted,
            ExhaustedPolicy::Match
        );
        let err = MatchConfig::from_var(Some("maybe")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid CIDR_TRIE_EXHAUSTED: unknown exhausted policy 'maybe', expected 'match' or 'reject'"
        );
    }

    #[test]
    fn test_deserialize() {
        let config: MatchConfig = serde_json::from_str(r#"{"exhausted":"reject"}"#).unwrap();
        assert_eq!(config, MatchConfig::strict());
        let config: MatchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
        assert!(serde_json::from_str::<MatchConfig>(r#"{"exhausted":"maybe"}"#).is_err());
    }
}
