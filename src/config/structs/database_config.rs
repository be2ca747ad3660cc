use serde::{Deserialize, Serialize};
use crate::sql_db::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: DatabaseDrivers,
    pub path: String,
    #[serde(default)]
    pub create_tables: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            engine: DatabaseDrivers::sqlite3,
            path: String::from("sqlite://data.db"),
            create_tables: false,
        }
    }
}
