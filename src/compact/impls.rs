pub mod compact_peer;
