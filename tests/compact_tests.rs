use std::net::Ipv4Addr;
use rand::RngExt;
use torrust_storage::compact::compact::{decode_compact_peers, encode_compact_peers, COMPACT_PEER_SIZE};
use torrust_storage::compact::structs::compact_peer::CompactPeer;

#[test]
fn test_compact_peers_from_random_rows() {
    let mut rng = rand::rng();
    let rows: Vec<(String, u16)> = (0..200)
        .map(|_| {
            let octets: [u8; 4] = rng.random();
            (Ipv4Addr::from(octets).to_string(), rng.random())
        })
        .collect();

    let buffer = encode_compact_peers(rows.iter().map(|(ip, port)| (ip.as_str(), *port)));
    assert_eq!(buffer.len(), rows.len() * COMPACT_PEER_SIZE);

    let peers = decode_compact_peers(&buffer).unwrap();
    for ((ip, port), peer) in rows.iter().zip(peers) {
        assert_eq!(peer.to_string(), format!("{ip}:{port}"));
    }
}

#[test]
fn test_compact_peers_keep_row_order() {
    let rows = vec![
        (String::from("192.168.1.10"), 6881u16),
        (String::from("2001:db8::1"), 6881u16),
        (String::from("10.1.2.3"), 80u16),
    ];
    let buffer = encode_compact_peers(rows);
    assert_eq!(buffer, vec![192, 168, 1, 10, 0x1a, 0xe1, 10, 1, 2, 3, 0x00, 0x50]);
    assert_eq!(decode_compact_peers(&buffer).unwrap(), vec![
        CompactPeer::new(Ipv4Addr::new(192, 168, 1, 10), 6881),
        CompactPeer::new(Ipv4Addr::new(10, 1, 2, 3), 80),
    ]);
}
