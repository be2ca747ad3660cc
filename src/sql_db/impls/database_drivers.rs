use std::fmt;
use std::fmt::Formatter;
use crate::sql_db::enums::database_drivers::DatabaseDrivers;

impl DatabaseDrivers {
    pub fn log_prefix(&self) -> &'static str {
        match self {
            DatabaseDrivers::sqlite3 => "[SQLite]",
            DatabaseDrivers::mysql => "[MySQL]",
            DatabaseDrivers::pgsql => "[PgSQL]",
        }
    }
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "SQLite"),
            DatabaseDrivers::mysql => write!(f, "MySQL"),
            DatabaseDrivers::pgsql => write!(f, "PgSQL"),
        }
    }
}
