//! BitTorrent compact peer list encoding (BEP 23).
//!
//! Each peer takes exactly six bytes: the IPv4 address octets followed by the
//! port, both big-endian, concatenated with no separator or length prefix.
//! Every call builds a fresh buffer; nothing is shared between calls.

#[allow(clippy::module_inception)]
pub mod compact;
pub mod errors;
pub mod structs;
pub mod impls;
