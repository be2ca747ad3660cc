use crate::sql_db::enums::database_drivers::DatabaseDrivers;
use crate::sql_db::enums::sql_pool::SqlPool;

impl SqlPool {
    pub fn engine(&self) -> DatabaseDrivers {
        match self {
            SqlPool::Sqlite(_) => DatabaseDrivers::sqlite3,
            SqlPool::MySql(_) => DatabaseDrivers::mysql,
            SqlPool::PgSql(_) => DatabaseDrivers::pgsql,
        }
    }

    pub async fn close(&self) {
        with_pool!(self, pool => pool.close().await)
    }

    pub fn is_closed(&self) -> bool {
        with_pool!(self, pool => pool.is_closed())
    }
}
