//! Canonical bit representation of IPv4 and IPv6 addresses.
//!
//! Provides [`AddressBits`], the fixed-length network-byte-order form the
//! trie walks one bit at a time, and [`parse_address`] to build it from text.

use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Number of bits in an IPv4 address.
pub const V4_BITS: u8 = 32;
/// Number of bits in an IPv6 address.
pub const V6_BITS: u8 = 128;

/// Address family, inferred from the address syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    /// Dotted-decimal, 32 bits.
    V4,
    /// Colon-hex, 128 bits.
    V6,
}

impl AddressFamily {
    /// Total number of bits for this family.
    pub fn bit_len(&self) -> u8 {
        match self {
            AddressFamily::V4 => V4_BITS,
            AddressFamily::V6 => V6_BITS,
        }
    }

    /// Total number of bytes for this family.
    pub fn byte_len(&self) -> usize {
        self.bit_len() as usize / 8
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// An address as an ordered byte sequence in network byte order.
///
/// The two variants pin the length to exactly 4 or 16 bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressBits {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl AddressBits {
    pub fn family(&self) -> AddressFamily {
        match self {
            AddressBits::V4(_) => AddressFamily::V4,
            AddressBits::V6(_) => AddressFamily::V6,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AddressBits::V4(octets) => &octets[..],
            AddressBits::V6(octets) => &octets[..],
        }
    }

    /// Total number of addressable bits (32 or 128).
    pub fn bit_len(&self) -> usize {
        self.as_bytes().len() * 8
    }

    /// Value of the bit at absolute position `index`, most significant first.
    ///
    /// Bit `p` lives in byte `p / 8` at shift `7 - p % 8`. Panics when
    /// `index >= self.bit_len()`; callers bound-check.
    ///
    /// # Examples
    /// ```
    /// use cidr_bit_trie::models::parse_address;
    /// let addr = parse_address("128.0.0.1").unwrap();
    /// assert!(addr.bit_at(0));
    /// assert!(!addr.bit_at(1));
    /// assert!(addr.bit_at(31));
    /// ```
    pub fn bit_at(&self, index: usize) -> bool {
        let byte = self.as_bytes()[index / 8];
        (byte >> (7 - (index % 8))) & 1 == 1
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match *self {
            AddressBits::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            AddressBits::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}

/// Parse an address in dotted-decimal or colon-hex form.
///
/// A trailing `/n` is accepted and validated but does not change the result,
/// so CIDR strings can be used directly as probes.
pub fn parse_address(text: &str) -> Result<AddressBits, ParseError> {
    let text = text.trim();
    let (addr_text, len_text) = match text.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (text, None),
    };
    let bits = parse_bare_address(addr_text)?;
    if let Some(len_text) = len_text {
        parse_prefix_len(len_text, bits.family())?;
    }
    Ok(bits)
}

/// Parse an address without any `/n` suffix.
pub(crate) fn parse_bare_address(text: &str) -> Result<AddressBits, ParseError> {
    let addr: IpAddr = text
        .parse()
        .map_err(|_| ParseError::InvalidAddress(text.to_string()))?;
    Ok(AddressBits::from(addr))
}

/// Parse a prefix length and check it against the family's bit length.
pub(crate) fn parse_prefix_len(text: &str, family: AddressFamily) -> Result<u8, ParseError> {
    // digits only: integer parsing would also take a leading '+'
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPrefixNotation(format!(
            "prefix length '{text}' is not a number"
        )));
    }
    match text.parse::<u8>() {
        Ok(len) if len <= family.bit_len() => Ok(len),
        _ => Err(ParseError::InvalidPrefixNotation(format!(
            "prefix length /{text} is too long for {family} (max /{max})",
            max = family.bit_len()
        ))),
    }
}

impl From<Ipv4Addr> for AddressBits {
    fn from(addr: Ipv4Addr) -> Self {
        AddressBits::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for AddressBits {
    fn from(addr: Ipv6Addr) -> Self {
        AddressBits::V6(addr.octets())
    }
}

impl From<IpAddr> for AddressBits {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<AddressBits> for IpAddr {
    fn from(bits: AddressBits) -> Self {
        bits.to_ip_addr()
    }
}

impl FromStr for AddressBits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl fmt::Display for AddressBits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}

impl Serialize for AddressBits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressBits {
    fn deserialize<D>(deserializer: D) -> Result<AddressBits, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(de::Error::custom)
    }
}
