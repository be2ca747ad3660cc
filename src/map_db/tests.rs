#[cfg(test)]
mod map_db_tests {
    use crate::map_db::enums::shard_node::ShardNode;
    use crate::map_db::map_db::{build_shard_trie, shard_depth, shard_path, MAX_SHARD_DEPTH};
    use crate::map_db::structs::map_db::MapDb;
    use crate::records::enums::record::Record;
    use crate::records::enums::record_kind::RecordKind;
    use crate::records::structs::announce_log::AnnounceLog;
    use crate::records::structs::file_record::FileRecord;
    use crate::records::structs::file_user_record::FileUserRecord;
    use crate::records::structs::lookup::Lookup;
    use crate::records::structs::user_record::UserRecord;
    use crate::storage::enums::storage_response::StorageResponse;
    use crate::storage::structs::storage_request::StorageRequest;
    use crate::storage::traits::storage_backend::StorageBackend;

    const INFO_HASH: &str = "0123456789abcdef0123456789abcdef01234567";

    fn file_record(completed: i64) -> Record {
        Record::File(FileRecord { id: 1, info_hash: INFO_HASH.to_string(), completed, ..Default::default() })
    }

    #[test]
    fn test_shard_depth() {
        assert_eq!(shard_depth(0), 0);
        assert_eq!(shard_depth(1), 0);
        assert_eq!(shard_depth(2), 1);
        assert_eq!(shard_depth(16), 1);
        assert_eq!(shard_depth(17), 2);
        assert_eq!(shard_depth(65536), 4);
        assert_eq!(shard_depth(16u64.pow(MAX_SHARD_DEPTH)), MAX_SHARD_DEPTH);
        assert_eq!(shard_depth(u64::MAX), 16);
    }

    #[test]
    fn test_map_db_clamps_depth() {
        assert_eq!(MapDb::new(u64::MAX).depth(), MAX_SHARD_DEPTH);
        assert_eq!(MapDb::new(4096).depth(), 3);
    }

    #[test]
    fn test_shard_path() {
        assert_eq!(shard_path("1763c39c", 3), Some(vec![1, 7, 6]));
        assert_eq!(shard_path("af", 2), Some(vec![10, 15]));
        assert_eq!(shard_path("anything", 0), Some(vec![]));
        assert_eq!(shard_path("ab", 3), None);
        assert_eq!(shard_path("zz00", 2), None);
    }

    #[test]
    fn test_build_is_bounded() {
        let trie = ShardNode::build(2);
        assert_eq!(trie.depth(), 2);
        assert_eq!(trie.leaf_count(), 256);
        assert!(trie.leaf(&[15, 15]).is_some());
        assert!(trie.leaf(&[15]).is_none());
        assert!(trie.leaf(&[1, 2, 3]).is_none());
        assert!(trie.leaf(&[16, 0]).is_none());
    }

    #[tokio::test]
    async fn test_build_shard_trie_coverage() {
        for depth in 0..=3u32 {
            let trie = build_shard_trie(depth).await;
            assert_eq!(trie.depth(), depth);
            assert_eq!(trie.leaf_count(), 16usize.pow(depth));
        }
    }

    #[tokio::test]
    async fn test_every_prefix_reaches_its_own_leaf() {
        let mut trie = build_shard_trie(2).await;
        for prefix in 0..256u32 {
            let key = format!("{prefix:02x}");
            let path = shard_path(&key, 2).unwrap();
            trie.leaf_mut(&path).unwrap().insert(key, vec![]);
        }
        assert_eq!(trie.record_count(), 256);
        for prefix in 0..256u32 {
            let key = format!("{prefix:02x}");
            let leaf = trie.leaf(&shard_path(&key, 2).unwrap()).unwrap();
            assert_eq!(leaf.len(), 1);
            assert!(leaf.contains_key(&key));
        }
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let mut map_db = MapDb::new(256);
        assert!(!map_db.is_initialized());
        map_db.init().await;
        assert_eq!(map_db.leaf_count(), 256);
        assert_eq!(map_db.put(&file_record(1)).await, StorageResponse::Stored);
        map_db.init().await;
        assert_eq!(map_db.len(), 1);
        assert!(map_db.contains(&file_record(1).key()));
    }

    #[tokio::test]
    async fn test_write_upserts_and_read_returns_latest() {
        let mut map_db = MapDb::new(4096);
        assert_eq!(map_db.write(&StorageRequest::write(file_record(1))).await, StorageResponse::Stored);
        assert_eq!(map_db.write(&StorageRequest::write(file_record(2))).await, StorageResponse::Stored);
        assert_eq!(map_db.len(), 1);

        let response = map_db.read(&StorageRequest::read(RecordKind::File, INFO_HASH)).await;
        assert_eq!(response, StorageResponse::Found(file_record(2)));
    }

    #[tokio::test]
    async fn test_read_missing_and_non_identity_lookups() {
        let mut map_db = MapDb::new(16);
        map_db.put(&file_record(1)).await;
        assert_eq!(map_db.read(&StorageRequest::read(RecordKind::File, "ffff")).await, StorageResponse::NotFound);
        assert_eq!(map_db.read(&StorageRequest::read_by(RecordKind::File, Lookup::by_id(1))).await, StorageResponse::NotFound);
        assert_eq!(map_db.read(&StorageRequest::read(RecordKind::AnnounceLog, INFO_HASH)).await, StorageResponse::NotFound);
    }

    #[tokio::test]
    async fn test_kinds_share_identity_without_colliding() {
        let mut map_db = MapDb::new(256);
        let log = Record::AnnounceLog(AnnounceLog { info_hash: INFO_HASH.to_string(), port: 6881, ..Default::default() });
        map_db.put(&log).await;
        map_db.put(&file_record(1)).await;
        map_db.put(&Record::FileUser(FileUserRecord { file_id: 1, user_id: 2, ..Default::default() })).await;
        assert_eq!(map_db.len(), 3);
        assert_eq!(map_db.count(RecordKind::AnnounceLog), 1);
        assert_eq!(map_db.get(RecordKind::AnnounceLog, &log.key()).await, StorageResponse::Found(log));
    }

    #[tokio::test]
    async fn test_users_are_ignored() {
        let mut map_db = MapDb::new(16);
        let user = Record::User(UserRecord { id: 1, username: String::from("goat"), ..Default::default() });
        assert_eq!(map_db.put(&user).await, StorageResponse::Skipped);
        assert_eq!(map_db.get(RecordKind::User, &user.key()).await, StorageResponse::NotFound);
        assert!(map_db.is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_releases_contents() {
        let mut map_db = MapDb::new(16);
        map_db.put(&file_record(1)).await;
        map_db.shutdown().await;
        assert!(!map_db.is_initialized());
        assert!(map_db.is_empty());
    }

    #[tokio::test]
    async fn test_stopped_store_restarts_empty() {
        let mut map_db = MapDb::new(256);
        assert_eq!(map_db.put(&file_record(1)).await, StorageResponse::Stored);
        map_db.stop().await;
        assert!(!map_db.is_initialized());

        let key = file_record(1).key();
        assert_eq!(map_db.get(RecordKind::File, &key).await, StorageResponse::NotFound);
        assert!(map_db.is_initialized());
        assert_eq!(map_db.leaf_count(), 256);
    }

    mod properties {
        use proptest::prelude::*;
        use crate::map_db::map_db::shard_path;
        use crate::records::enums::record_kind::RecordKind;

        proptest! {
            #[test]
            fn same_identity_same_path(identity in "[0-9a-f]{40}", depth in 0u32..=5) {
                let first = RecordKind::File.key_for(&identity);
                let second = RecordKind::File.key_for(&identity);
                prop_assert_eq!(&first, &second);
                let path = shard_path(&first, depth).unwrap();
                prop_assert_eq!(path.len(), depth as usize);
                prop_assert_eq!(Some(path), shard_path(&second, depth));
            }

            #[test]
            fn depth_covers_capacity(capacity in 1u64..=16u64.pow(5)) {
                let depth = crate::map_db::map_db::shard_depth(capacity);
                prop_assert!(16u64.pow(depth) >= capacity);
                prop_assert!(depth == 0 || 16u64.pow(depth - 1) < capacity);
            }
        }
    }
}
