use ahash::AHashMap;
use crate::map_db::enums::shard_node::ShardNode;

impl ShardNode {
    /// Builds `depth` levels below this node. Recursion stops at depth zero.
    pub fn build(depth: u32) -> ShardNode {
        match depth {
            0 => ShardNode::Leaf(AHashMap::new()),
            _ => ShardNode::Branch(Box::new(std::array::from_fn(|_| ShardNode::build(depth - 1))))
        }
    }

    /// Number of levels from this node down to its leaves.
    pub fn depth(&self) -> u32 {
        match self {
            ShardNode::Branch(children) => 1 + children[0].depth(),
            ShardNode::Leaf(_) => 0
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            ShardNode::Branch(children) => children.iter().map(ShardNode::leaf_count).sum(),
            ShardNode::Leaf(_) => 1
        }
    }

    pub fn record_count(&self) -> usize {
        match self {
            ShardNode::Branch(children) => children.iter().map(ShardNode::record_count).sum(),
            ShardNode::Leaf(entries) => entries.len()
        }
    }

    /// Follows `path` to a leaf. `None` if the path is too short, too long or out of range.
    pub fn leaf(&self, path: &[u8]) -> Option<&AHashMap<String, Vec<u8>>> {
        match (self, path.split_first()) {
            (ShardNode::Leaf(entries), None) => Some(entries),
            (ShardNode::Branch(children), Some((index, rest))) => children.get(*index as usize)?.leaf(rest),
            _ => None
        }
    }

    pub fn leaf_mut(&mut self, path: &[u8]) -> Option<&mut AHashMap<String, Vec<u8>>> {
        match (self, path.split_first()) {
            (ShardNode::Leaf(entries), None) => Some(entries),
            (ShardNode::Branch(children), Some((index, rest))) => children.get_mut(*index as usize)?.leaf_mut(rest),
            _ => None
        }
    }
}
