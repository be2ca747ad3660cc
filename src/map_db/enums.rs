/// Node of the shard trie.
pub mod shard_node;
