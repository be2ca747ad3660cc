use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::ConnectOptions;
use crate::sql_db::enums::database_drivers::DatabaseDrivers;
use crate::sql_db::enums::sql_pool::SqlPool;

const SLOW_STATEMENT: Duration = Duration::from_secs(1);

/// Builds the pool for `engine` without opening a connection.
///
/// Only a malformed DSN fails here; connectivity problems surface on first use.
/// Must be called from within a Tokio runtime.
pub fn connect_pool(engine: DatabaseDrivers, dsn: &str) -> Result<SqlPool, sqlx::Error> {
    Ok(match engine {
        DatabaseDrivers::sqlite3 => {
            let options = SqliteConnectOptions::from_str(dsn)?
                .create_if_missing(true)
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Debug, SLOW_STATEMENT);
            SqlPool::Sqlite(SqlitePoolOptions::new().connect_lazy_with(options))
        }
        DatabaseDrivers::mysql => {
            let options = MySqlConnectOptions::from_str(dsn)?
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Debug, SLOW_STATEMENT);
            SqlPool::MySql(MySqlPoolOptions::new().connect_lazy_with(options))
        }
        DatabaseDrivers::pgsql => {
            let options = PgConnectOptions::from_str(dsn)?
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Debug, SLOW_STATEMENT);
            SqlPool::PgSql(PgPoolOptions::new().connect_lazy_with(options))
        }
    })
}
