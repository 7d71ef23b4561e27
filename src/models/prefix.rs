//! CIDR prefix notation (`address/length`).

use super::address::{parse_bare_address, parse_prefix_len, AddressBits, AddressFamily};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An address paired with the number of leading bits that are significant.
///
/// The address is kept as written: host bits past `prefix_len` are not
/// zeroed, they are simply never read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkPrefix {
    bits: AddressBits,
    prefix_len: u8,
}

impl NetworkPrefix {
    /// Build a prefix, rejecting a length longer than the address family.
    pub fn new(bits: AddressBits, prefix_len: u8) -> Result<NetworkPrefix, ParseError> {
        let max = bits.family().bit_len();
        if prefix_len > max {
            return Err(ParseError::InvalidPrefixNotation(format!(
                "{bits}/{prefix_len}: prefix length is too long (max /{max})"
            )));
        }
        Ok(NetworkPrefix { bits, prefix_len })
    }

    pub fn bits(&self) -> &AddressBits {
        &self.bits
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> AddressFamily {
        self.bits.family()
    }

    /// True when `addr` is the same family and agrees on the first
    /// `prefix_len` bits.
    ///
    /// A direct bit comparison, independent of any trie.
    pub fn covers(&self, addr: &AddressBits) -> bool {
        addr.family() == self.family()
            && (0..self.prefix_len as usize).all(|i| addr.bit_at(i) == self.bits.bit_at(i))
    }
}

/// Parse `address/length` prefix notation.
///
/// # Examples
/// ```
/// use cidr_bit_trie::models::parse_prefix;
/// let prefix = parse_prefix("10.0.0.0/8").unwrap();
/// assert_eq!(prefix.prefix_len(), 8);
/// assert!(parse_prefix("10.0.0.0").is_err());
/// ```
pub fn parse_prefix(text: &str) -> Result<NetworkPrefix, ParseError> {
    let text = text.trim();
    let (addr_text, len_text) = text.split_once('/').ok_or_else(|| {
        ParseError::InvalidPrefixNotation(format!("{text}: missing '/' separator"))
    })?;
    let bits = parse_bare_address(addr_text)
        .map_err(|e| ParseError::InvalidPrefixNotation(format!("{text}: {e}")))?;
    let prefix_len = parse_prefix_len(len_text, bits.family())?;
    Ok(NetworkPrefix { bits, prefix_len })
}

impl FromStr for NetworkPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefix(s)
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.bits, self.prefix_len)
    }
}

impl Serialize for NetworkPrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkPrefix {
    fn deserialize<D>(deserializer: D) -> Result<NetworkPrefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefix(&s).map_err(de::Error::custom)
    }
}
