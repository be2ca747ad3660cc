// Performance benchmarks for Torrust-Storage
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::hint::black_box;
use std::net::Ipv4Addr;
use torrust_storage::compact::compact::encode_compact_peers;
use torrust_storage::map_db::map_db::build_shard_trie;
use torrust_storage::map_db::structs::map_db::MapDb;
use torrust_storage::records::enums::record::Record;
use torrust_storage::records::structs::file_record::FileRecord;

fn random_info_hash() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    hex::encode(bytes)
}

fn create_file(info_hash: String) -> Record {
    Record::File(FileRecord {
        info_hash,
        verified: true,
        ..Default::default()
    })
}

fn bench_build_shard_trie(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("build_shard_trie");

    for depth in [1u32, 2, 3, 4].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                black_box(rt.block_on(build_shard_trie(depth)));
            });
        });
    }

    group.finish();
}

fn bench_map_db_put(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut map_db = MapDb::new(65536);
    rt.block_on(map_db.start());

    c.bench_function("map_db_put_1000_files", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..1000 {
                    black_box(map_db.put(&create_file(random_info_hash())).await);
                }
            });
        });
    });
}

fn bench_encode_compact_peers(c: &mut Criterion) {
    let mut rng = rand::rng();
    let mut group = c.benchmark_group("encode_compact_peers");

    for count in [10usize, 50, 200].iter() {
        let rows: Vec<(String, u16)> = (0..*count)
            .map(|_| {
                let octets: [u8; 4] = rng.random();
                (Ipv4Addr::from(octets).to_string(), 6881)
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| {
                black_box(encode_compact_peers(rows.iter().map(|(ip, port)| (ip.as_str(), *port))));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_shard_trie,
    bench_map_db_put,
    bench_encode_compact_peers
);
criterion_main!(benches);
