use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub map_enabled: bool,
    pub sql_enabled: bool,
    /// Number of keys the sharded map should spread evenly; sizes the trie depth.
    pub capacity: u64,
    pub request_buffer: usize,
    pub map_buffer: usize,
    pub sql_buffer: usize,
    /// Seconds a backend may take to drain on shutdown, 0 waits forever.
    pub shutdown_deadline: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            map_enabled: true,
            sql_enabled: true,
            capacity: 65536,
            request_buffer: 1024,
            map_buffer: 100,
            sql_buffer: 1,
            shutdown_deadline: 30,
        }
    }
}
