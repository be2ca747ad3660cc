use crate::sql_db::enums::database_drivers::DatabaseDrivers;

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => format!("\"{}\"", identifier),
    }
}

/// Placeholder for the `index`th bound value, counting from 1.
pub fn placeholder(engine: DatabaseDrivers, index: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::from("?"),
        DatabaseDrivers::pgsql => format!("${}", index),
    }
}

pub fn placeholder_list(engine: DatabaseDrivers, start: usize, count: usize) -> String {
    (start..start + count)
        .map(|index| placeholder(engine, index))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn upsert_conflict_clause(engine: DatabaseDrivers, conflict_columns: &[&str], update_columns: &[&str]) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
            let conflict: Vec<String> = conflict_columns
                .iter()
                .map(|col| quote_identifier(engine, col))
                .collect();
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=excluded.{}", quoted, quoted)
                })
                .collect();
            format!(
                "ON CONFLICT ({}) DO UPDATE SET {}",
                conflict.join(", "),
                updates.join(", ")
            )
        }
        DatabaseDrivers::mysql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=VALUES({})", quoted, quoted)
                })
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
        }
    }
}

/// Casts an aggregate to a 64-bit signed integer; `SUM` yields DECIMAL or NUMERIC otherwise.
pub fn cast_bigint(engine: DatabaseDrivers, expression: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 => format!("CAST({} AS INTEGER)", expression),
        DatabaseDrivers::mysql => format!("CAST({} AS SIGNED)", expression),
        DatabaseDrivers::pgsql => format!("CAST({} AS BIGINT)", expression),
    }
}

pub fn build_insert_query(engine: DatabaseDrivers, table_name: &str, columns: &[&str]) -> String {
    let quoted_columns: Vec<String> = columns
        .iter()
        .map(|col| quote_identifier(engine, col))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(engine, table_name),
        quoted_columns.join(", "),
        placeholder_list(engine, 1, columns.len())
    )
}

/// Insert that overwrites `update_columns` when a row with the same `conflict_columns` exists.
pub fn build_upsert_query(
    engine: DatabaseDrivers,
    table_name: &str,
    columns: &[&str],
    conflict_columns: &[&str],
    update_columns: &[&str],
) -> String {
    format!(
        "{} {}",
        build_insert_query(engine, table_name, columns),
        upsert_conflict_clause(engine, conflict_columns, update_columns)
    )
}

/// Point lookup of one row matching every condition column.
pub fn build_select_query(engine: DatabaseDrivers, table_name: &str, condition_columns: &[&str]) -> String {
    let conditions: Vec<String> = condition_columns
        .iter()
        .enumerate()
        .map(|(index, col)| format!("{}={}", quote_identifier(engine, col), placeholder(engine, index + 1)))
        .collect();
    format!(
        "SELECT * FROM {} WHERE {} LIMIT 1",
        quote_identifier(engine, table_name),
        conditions.join(" AND ")
    )
}

/// Distinct active users of one file. Binds: info_hash, active, completed.
/// Seeders have nothing left, leechers still have bytes left.
pub fn build_peer_count_query(engine: DatabaseDrivers, seeders: bool) -> String {
    let left = quote_identifier(engine, "left");
    let left_condition = if seeders { format!("fu.{left} = 0") } else { format!("fu.{left} > 0") };
    format!(
        "SELECT COUNT(DISTINCT fu.user_id) FROM {} fu JOIN {} f ON f.id = fu.file_id WHERE f.info_hash = {} AND fu.active = {} AND fu.completed = {} AND {}",
        quote_identifier(engine, "files_users"),
        quote_identifier(engine, "files"),
        placeholder(engine, 1),
        placeholder(engine, 2),
        placeholder(engine, 3),
        left_condition
    )
}

/// Addresses of active peers on one file. Binds: active, info_hash, excluded ip, limit.
pub fn build_peer_list_query(engine: DatabaseDrivers) -> String {
    format!(
        "SELECT DISTINCT a.ip, a.port FROM {} a JOIN {} f ON a.info_hash = f.info_hash JOIN {} fu ON f.id = fu.file_id WHERE fu.active = {} AND f.info_hash = {} AND a.ip <> {} LIMIT {}",
        quote_identifier(engine, "announce_log"),
        quote_identifier(engine, "files"),
        quote_identifier(engine, "files_users"),
        placeholder(engine, 1),
        placeholder(engine, 2),
        placeholder(engine, 3),
        placeholder(engine, 4)
    )
}

/// Sum of one transfer column over a user's file relations. Binds: user_id.
pub fn build_user_total_query(engine: DatabaseDrivers, column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE user_id = {}",
        cast_bigint(engine, &format!("COALESCE(SUM({}), 0)", quote_identifier(engine, column))),
        quote_identifier(engine, "files_users"),
        placeholder(engine, 1)
    )
}

pub fn create_table_statements(engine: DatabaseDrivers) -> Vec<String> {
    let (id, int, boolean, hash, text) = match engine {
        DatabaseDrivers::sqlite3 => ("INTEGER PRIMARY KEY AUTOINCREMENT", "INTEGER", "INTEGER", "TEXT", "TEXT"),
        DatabaseDrivers::mysql => ("BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY", "BIGINT", "BOOLEAN", "VARCHAR(40)", "VARCHAR(255)"),
        DatabaseDrivers::pgsql => ("BIGSERIAL PRIMARY KEY", "BIGINT", "BOOLEAN", "VARCHAR(40)", "VARCHAR(255)"),
    };
    let q = |identifier: &str| quote_identifier(engine, identifier);
    let announce_index = match engine {
        DatabaseDrivers::mysql => format!(", INDEX {} ({})", q("announce_log_info_hash"), q("info_hash")),
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => String::new(),
    };
    let mut statements = vec![
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {id}, {} {hash} NOT NULL, {} {text} NOT NULL, {} {text} NOT NULL, {} {int} NOT NULL, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, {} {text} NOT NULL DEFAULT '', {} {int} NOT NULL DEFAULT 0{announce_index})",
            q("announce_log"), q("id"), q("info_hash"), q("peer_id"), q("ip"), q("port"), q("uploaded"), q("downloaded"), q("left"), q("event"), q("time")
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {id}, {} {hash} NOT NULL UNIQUE, {} {boolean} NOT NULL, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0)",
            q("files"), q("id"), q("info_hash"), q("verified"), q("completed"), q("create_time"), q("update_time")
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {int} NOT NULL, {} {int} NOT NULL, {} {boolean} NOT NULL, {} {boolean} NOT NULL, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, {} {int} NOT NULL DEFAULT 0, PRIMARY KEY ({}, {}))",
            q("files_users"), q("file_id"), q("user_id"), q("active"), q("completed"), q("announced"), q("uploaded"), q("downloaded"), q("left"), q("time"), q("file_id"), q("user_id")
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {id}, {} {text} NOT NULL UNIQUE, {} {text} NOT NULL, {} {int} NOT NULL DEFAULT 0)",
            q("users"), q("id"), q("username"), q("passkey"), q("torrent_limit")
        ),
    ];
    if engine != DatabaseDrivers::mysql {
        statements.push(format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            q("announce_log_info_hash"), q("announce_log"), q("info_hash")
        ));
    }
    statements
}
