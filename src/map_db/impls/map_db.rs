use ahash::AHashMap;
use log::{debug, error, info, warn};
use crate::config::structs::storage_config::StorageConfig;
use crate::map_db::map_db::{build_shard_trie, shard_depth, shard_path, LOG_PREFIX, MAX_SHARD_DEPTH};
use crate::map_db::structs::map_db::MapDb;
use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::storage::enums::storage_response::StorageResponse;

impl MapDb {
    /// Sizes the trie for `capacity` keys. Nothing is allocated until [`MapDb::start`].
    /// Depths beyond [`MAX_SHARD_DEPTH`] are clamped; leaves then hold more keys each.
    pub fn new(capacity: u64) -> MapDb {
        let depth = shard_depth(capacity);
        if depth > MAX_SHARD_DEPTH {
            warn!("{LOG_PREFIX} Capacity {capacity} needs trie depth {depth}, using {MAX_SHARD_DEPTH}");
        }
        MapDb {
            depth: depth.min(MAX_SHARD_DEPTH),
            trie: None,
            index: None,
        }
    }

    pub fn from_config(config: &StorageConfig) -> MapDb {
        MapDb::new(config.capacity)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_initialized(&self) -> bool {
        self.trie.is_some()
    }

    /// Allocates the trie and the flat index. A second call leaves both untouched.
    pub async fn start(&mut self) {
        if self.trie.is_none() {
            debug!("{LOG_PREFIX} Building shard trie of depth {}", self.depth);
            self.trie = Some(build_shard_trie(self.depth).await);
        }
        if self.index.is_none() {
            self.index = Some(AHashMap::new());
        }
    }

    /// Upserts `record` into its shard. Kinds the map does not keep are skipped.
    pub async fn put(&mut self, record: &Record) -> StorageResponse {
        let kind = record.kind();
        if !kind.is_map_stored() {
            debug!("{LOG_PREFIX} Ignoring write of {kind}");
            return StorageResponse::Skipped;
        }
        self.start().await;

        let key = record.key();
        let data = match record.encode() {
            Ok(data) => { data }
            Err(error) => {
                error!("{LOG_PREFIX} Unable to encode {kind} {key}: {error}");
                return StorageResponse::Failed;
            }
        };
        let Some(path) = shard_path(&key, self.depth) else {
            error!("{LOG_PREFIX} Key {key} does not address a shard");
            return StorageResponse::Failed;
        };
        match self.trie.as_mut().and_then(|trie| trie.leaf_mut(&path)) {
            Some(leaf) => {
                leaf.insert(key.clone(), data);
            }
            None => {
                error!("{LOG_PREFIX} No shard for key {key}");
                return StorageResponse::Failed;
            }
        }
        if let Some(index) = self.index.as_mut() {
            index.insert(key, kind);
        }
        StorageResponse::Stored
    }

    /// Looks `key` up in its shard and decodes the stored record.
    pub async fn get(&mut self, kind: RecordKind, key: &str) -> StorageResponse {
        if !kind.is_map_stored() {
            return StorageResponse::NotFound;
        }
        self.start().await;

        let Some(path) = shard_path(key, self.depth) else {
            return StorageResponse::NotFound;
        };
        let Some(data) = self.trie.as_ref().and_then(|trie| trie.leaf(&path)).and_then(|leaf| leaf.get(key)) else {
            return StorageResponse::NotFound;
        };
        match Record::decode(data) {
            Ok(record) if record.kind() == kind => StorageResponse::Found(record),
            Ok(_) => StorageResponse::NotFound,
            Err(error) => {
                error!("{LOG_PREFIX} Unable to decode {kind} {key}: {error}");
                StorageResponse::Failed
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.as_ref().is_some_and(|index| index.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.index.as_ref().map_or(0, |index| index.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored records of `kind`.
    pub fn count(&self, kind: RecordKind) -> usize {
        self.index.as_ref().map_or(0, |index| index.values().filter(|stored| **stored == kind).count())
    }

    pub fn leaf_count(&self) -> usize {
        self.trie.as_ref().map_or(0, |trie| trie.leaf_count())
    }

    /// Releases the trie and the index. The store starts empty if used again.
    pub async fn stop(&mut self) {
        info!("{LOG_PREFIX} stopping MapDb");
        self.trie = None;
        self.index = None;
    }
}
