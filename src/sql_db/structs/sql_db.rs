use std::sync::Arc;
use crate::sql_db::enums::database_drivers::DatabaseDrivers;
use crate::sql_db::enums::sql_pool::SqlPool;
use crate::storage::structs::in_flight::InFlight;

/// Cheap to clone; clones share the pool and the in-flight counter.
#[derive(Debug, Clone)]
pub struct SqlDb {
    pub(crate) engine: DatabaseDrivers,
    pub(crate) pool: SqlPool,
    /// Create the schema when the backend initializes.
    pub(crate) create_tables: bool,
    pub(crate) in_flight: Arc<InFlight>,
}
