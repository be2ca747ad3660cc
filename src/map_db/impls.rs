pub mod map_db;
pub mod shard_node;
pub mod storage_backend;
