use sqlx::{MySql, Pool, Postgres, Sqlite};

#[derive(Debug, Clone)]
pub enum SqlPool {
    Sqlite(Pool<Sqlite>),
    MySql(Pool<MySql>),
    PgSql(Pool<Postgres>),
}
