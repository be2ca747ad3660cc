use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompactPeer {
    pub ip: Ipv4Addr,
    pub port: u16,
}
