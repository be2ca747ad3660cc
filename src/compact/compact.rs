use std::io::Cursor;
use std::net::Ipv4Addr;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::warn;
use crate::compact::errors::CompactError;
use crate::compact::structs::compact_peer::CompactPeer;

pub const COMPACT_PEER_SIZE: usize = 6;

pub fn write_compact_peer(buffer: &mut Vec<u8>, peer: &CompactPeer) -> Result<(), CompactError> {
    buffer.write_u32::<BigEndian>(u32::from(peer.ip))?;
    buffer.write_u16::<BigEndian>(peer.port)?;
    Ok(())
}

/// Encodes `(ip, port)` rows in the order given.
///
/// Rows whose address is not IPv4 are logged and skipped, so a bad row never
/// shifts or corrupts the bytes of the rows after it.
pub fn encode_compact_peers<I, S>(peers: I) -> Vec<u8>
where
    I: IntoIterator<Item = (S, u16)>,
    S: AsRef<str>,
{
    let peers = peers.into_iter();
    let mut buffer = Vec::with_capacity(peers.size_hint().0 * COMPACT_PEER_SIZE);
    for (ip, port) in peers {
        let peer = match CompactPeer::parse(ip.as_ref(), port) {
            Ok(peer) => { peer }
            Err(error) => {
                warn!("[COMPACT] Skipping peer row: {error}");
                continue;
            }
        };
        if let Err(error) = write_compact_peer(&mut buffer, &peer) {
            warn!("[COMPACT] Skipping peer {peer}: {error}");
            buffer.truncate(buffer.len() - buffer.len() % COMPACT_PEER_SIZE);
        }
    }
    buffer
}

/// Strict variant of [`encode_compact_peers`]: the first malformed row fails the whole call.
pub fn try_encode_compact_peers<I, S>(peers: I) -> Result<Vec<u8>, CompactError>
where
    I: IntoIterator<Item = (S, u16)>,
    S: AsRef<str>,
{
    let mut buffer = Vec::new();
    for (ip, port) in peers {
        write_compact_peer(&mut buffer, &CompactPeer::parse(ip.as_ref(), port)?)?;
    }
    Ok(buffer)
}

pub fn decode_compact_peers(data: &[u8]) -> Result<Vec<CompactPeer>, CompactError> {
    if data.len() % COMPACT_PEER_SIZE != 0 {
        return Err(CompactError::Truncated(data.len()));
    }
    let mut peers = Vec::with_capacity(data.len() / COMPACT_PEER_SIZE);
    let mut rdr = Cursor::new(data);
    for _ in 0..data.len() / COMPACT_PEER_SIZE {
        let ip = Ipv4Addr::from(rdr.read_u32::<BigEndian>()?);
        let port = rdr.read_u16::<BigEndian>()?;
        peers.push(CompactPeer::new(ip, port));
    }
    Ok(peers)
}
