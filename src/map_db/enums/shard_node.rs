use ahash::AHashMap;

#[derive(Debug)]
pub enum ShardNode {
    /// Sixteen children, indexed by hex digit `0`..`f`.
    Branch(Box<[ShardNode; 16]>),
    /// Encoded records by full key.
    Leaf(AHashMap<String, Vec<u8>>),
}
