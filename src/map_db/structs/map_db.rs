use ahash::AHashMap;
use crate::map_db::enums::shard_node::ShardNode;
use crate::records::enums::record_kind::RecordKind;

/// Every operation takes `&mut self`, so the worker that owns the store runs them one at
/// a time and nothing is in flight once it stops receiving requests.
#[derive(Debug)]
pub struct MapDb {
    pub(crate) depth: u32,
    pub(crate) trie: Option<ShardNode>,
    /// Flat view of every stored key.
    pub(crate) index: Option<AHashMap<String, RecordKind>>,
}
