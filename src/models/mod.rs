//! Address and prefix models.
//!
//! This module contains the value types the trie is keyed on:
//! - [`AddressBits`] - an address as 4 or 16 network-order bytes
//! - [`NetworkPrefix`] - an address plus a prefix length

mod address;
mod prefix;

// Re-export public types
pub use address::{parse_address, AddressBits, AddressFamily, V4_BITS, V6_BITS};
pub use prefix::{parse_prefix, NetworkPrefix};
