/// Binds a slice of `SqlValue`s, in order, onto any sqlx query builder.
macro_rules! bind_values {
    ($query:expr, $values:expr) => {{
        let mut query = $query;
        for value in $values.iter() {
            query = match value {
                $crate::sql_db::enums::sql_value::SqlValue::Int(value) => query.bind(*value),
                $crate::sql_db::enums::sql_value::SqlValue::Text(value) => query.bind(value.as_str()),
                $crate::sql_db::enums::sql_value::SqlValue::Bool(value) => query.bind(*value),
            };
        }
        query
    }};
}

/// Expands `$body` once per engine with `$pool` bound to that engine's pool.
macro_rules! with_pool {
    ($pool_enum:expr, $pool:ident => $body:expr) => {
        match $pool_enum {
            $crate::sql_db::enums::sql_pool::SqlPool::Sqlite($pool) => $body,
            $crate::sql_db::enums::sql_pool::SqlPool::MySql($pool) => $body,
            $crate::sql_db::enums::sql_pool::SqlPool::PgSql($pool) => $body,
        }
    };
}
