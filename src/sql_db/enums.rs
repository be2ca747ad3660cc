/// Supported database engines.
pub mod database_drivers;
/// Engine specific connection pool.
pub mod sql_pool;
/// A value bound to a statement placeholder.
pub mod sql_value;
