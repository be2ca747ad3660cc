//! Sharded in-memory store.
//!
//! The key space is split into a fixed trie of hexadecimal shards. With `capacity`
//! taken from configuration the trie has depth `D = ceil(log16(capacity))`, giving
//! `16^D` leaf maps. A record lives in the leaf addressed by the first `D` hex digits
//! of its key and is stored there, MessagePack encoded, under the full key.
//!
//! The trie shape is fixed once [`MapDb`](structs::map_db::MapDb) initializes and is
//! never resized. Only announce logs, files and file/user relations are kept here;
//! users are ignored.

#[allow(clippy::module_inception)]
pub mod map_db;
pub mod enums;
pub mod impls;
pub mod structs;

#[cfg(test)]
mod tests;
