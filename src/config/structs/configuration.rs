use serde::{Deserialize, Serialize};
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::storage_config::StorageConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
