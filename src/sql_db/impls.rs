pub mod database_drivers;
pub mod sql_db;
pub mod sql_pool;
pub mod sql_value;
pub mod storage_backend;
