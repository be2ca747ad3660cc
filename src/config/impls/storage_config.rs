use std::time::Duration;
use crate::config::structs::storage_config::StorageConfig;
use crate::dispatcher::enums::routing_mode::RoutingMode;
use crate::map_db::map_db::shard_depth;

impl StorageConfig {
    pub fn shard_depth(&self) -> u32 {
        shard_depth(self.capacity)
    }

    pub fn routing_mode(&self) -> RoutingMode {
        RoutingMode::from_flags(self.map_enabled, self.sql_enabled)
    }

    pub fn shutdown_deadline(&self) -> Option<Duration> {
        match self.shutdown_deadline {
            0 => None,
            seconds => Some(Duration::from_secs(seconds))
        }
    }
}
