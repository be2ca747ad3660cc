use ahash::AHashMap;
use futures_util::future::join_all;
use log::error;
use crate::map_db::enums::shard_node::ShardNode;

/// Deepest trie allowed by configuration; depth 5 already holds 1,048,576 leaves.
pub const MAX_SHARD_DEPTH: u32 = 5;

pub const LOG_PREFIX: &str = "[MapDb]";

/// Smallest `D` with `16^D >= capacity`. A capacity of 0 or 1 needs no branching.
pub fn shard_depth(capacity: u64) -> u32 {
    let mut depth = 0;
    let mut leaves: u128 = 1;
    while leaves < capacity as u128 {
        leaves *= 16;
        depth += 1;
    }
    depth
}

/// The child indexes leading from the root to the leaf of `key`.
///
/// `None` when `key` is shorter than `depth` or its prefix is not hexadecimal.
pub fn shard_path(key: &str, depth: u32) -> Option<Vec<u8>> {
    let prefix = key.get(..depth as usize)?;
    prefix
        .chars()
        .map(|digit| digit.to_digit(16).map(|nibble| nibble as u8))
        .collect()
}

/// Builds a trie of exactly `depth` levels.
///
/// The sixteen top-level branches are disjoint and are built in parallel on the
/// blocking pool; below that each branch is built by the bounded recursion in
/// [`ShardNode::build`].
#[tracing::instrument(level = "debug")]
pub async fn build_shard_trie(depth: u32) -> ShardNode {
    let depth = depth.min(MAX_SHARD_DEPTH);
    if depth == 0 {
        return ShardNode::Leaf(AHashMap::new());
    }
    let branches = join_all(
        (0..16).map(|_| tokio::task::spawn_blocking(move || ShardNode::build(depth - 1)))
    ).await;
    let mut branches = branches.into_iter();
    ShardNode::Branch(Box::new(std::array::from_fn(|_| {
        match branches.next() {
            Some(Ok(node)) => node,
            Some(Err(error)) => {
                error!("{LOG_PREFIX} Shard build task failed, building inline: {error}");
                ShardNode::build(depth - 1)
            }
            None => ShardNode::build(depth - 1)
        }
    })))
}
