use std::fmt;
use std::fmt::Formatter;
use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};
use std::str::FromStr;
use crate::compact::errors::CompactError;
use crate::compact::structs::compact_peer::CompactPeer;

impl CompactPeer {
    pub fn new(ip: Ipv4Addr, port: u16) -> CompactPeer {
        CompactPeer { ip, port }
    }

    /// Parses a textual address as stored in `announce_log.ip`.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are accepted; any other IPv6
    /// address cannot be expressed in the six byte format.
    pub fn parse(ip: &str, port: u16) -> Result<CompactPeer, CompactError> {
        match IpAddr::from_str(ip.trim()) {
            Ok(IpAddr::V4(ipv4)) => Ok(CompactPeer::new(ipv4, port)),
            Ok(IpAddr::V6(ipv6)) => match ipv6.to_ipv4_mapped() {
                Some(ipv4) => Ok(CompactPeer::new(ipv4, port)),
                None => Err(CompactError::InvalidIpv4(ip.to_string())),
            },
            Err(_) => Err(CompactError::InvalidIpv4(ip.to_string())),
        }
    }
}

impl From<SocketAddrV4> for CompactPeer {
    fn from(addr: SocketAddrV4) -> Self {
        CompactPeer::new(*addr.ip(), addr.port())
    }
}

impl From<CompactPeer> for SocketAddrV4 {
    fn from(peer: CompactPeer) -> Self {
        SocketAddrV4::new(peer.ip, peer.port)
    }
}

impl fmt::Display for CompactPeer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
