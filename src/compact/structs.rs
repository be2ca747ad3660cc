/// One decoded `(IPv4, port)` entry of a compact peer list.
pub mod compact_peer;
