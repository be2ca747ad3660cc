use std::sync::Arc;
use log::{debug, error, info, warn};
use sqlx::mysql::MySqlRow;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;
use crate::common::common::current_time;
use crate::compact::compact::encode_compact_peers;
use crate::config::structs::database_config::DatabaseConfig;
use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::announce_log::AnnounceLog;
use crate::records::structs::file_record::FileRecord;
use crate::records::structs::file_user_record::FileUserRecord;
use crate::records::structs::lookup::Lookup;
use crate::records::structs::user_record::UserRecord;
use crate::sql_db::enums::database_drivers::DatabaseDrivers;
use crate::sql_db::enums::sql_value::SqlValue;
use crate::sql_db::helpers::{
    build_insert_query, build_peer_count_query, build_peer_list_query, build_select_query,
    build_upsert_query, build_user_total_query, create_table_statements,
};
use crate::sql_db::sql_db::connect_pool;
use crate::sql_db::structs::sql_db::SqlDb;
use crate::storage::structs::in_flight::InFlight;

impl SqlDb {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: &DatabaseConfig) -> Result<SqlDb, sqlx::Error> {
        Ok(SqlDb {
            engine: config.engine,
            pool: connect_pool(config.engine, &config.path)?,
            create_tables: config.create_tables,
            in_flight: Arc::new(InFlight::new()),
        })
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.engine
    }

    pub fn in_flight(&self) -> Arc<InFlight> {
        self.in_flight.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create_tables(&self) -> bool {
        let _guard = self.in_flight.enter();
        let prefix = self.engine.log_prefix();
        for statement in create_table_statements(self.engine) {
            let result: Result<(), sqlx::Error> = with_pool!(&self.pool, pool => {
                sqlx::query(&statement).execute(pool).await.map(|_| ())
            });
            if let Err(error) = result {
                error!("{prefix} Unable to create tables: {error}");
                return false;
            }
        }
        info!("{prefix} Tables created");
        true
    }

    /// Stores `record` in one transaction. Announce logs are appended; every other
    /// record is inserted or updated by its unique key.
    #[tracing::instrument(level = "debug")]
    pub async fn save(&self, record: &Record) -> bool {
        let _guard = self.in_flight.enter();
        let (query, values) = self.save_statement(record);
        match self.execute_in_transaction(&query, &values).await {
            Ok(()) => true,
            Err(error) => {
                error!("{} Unable to save {} {}: {error}", self.engine.log_prefix(), record.kind(), record.identity());
                false
            }
        }
    }

    /// Fetches one `kind` row matching every condition of `lookup`.
    #[tracing::instrument(level = "debug")]
    pub async fn load(&self, kind: RecordKind, lookup: &Lookup) -> Option<Record> {
        let _guard = self.in_flight.enter();
        let prefix = self.engine.log_prefix();
        let unknown = lookup.unknown_columns(kind);
        if !unknown.is_empty() {
            warn!("{prefix} Refusing lookup on unknown {kind} column(s): {}", unknown.join(", "));
            return None;
        }
        if lookup.conditions().is_empty() {
            warn!("{prefix} Refusing {kind} lookup without conditions");
            return None;
        }
        let columns: Vec<&str> = lookup.conditions().iter().map(|(column, _)| column.as_str()).collect();
        let values: Vec<SqlValue> = lookup.conditions().iter().map(|(_, value)| SqlValue::from(value)).collect();
        let query = build_select_query(self.engine, kind.table_name(), &columns);
        let result = match kind {
            RecordKind::AnnounceLog => self.fetch_record::<AnnounceLog>(&query, &values).await.map(|row| row.map(Record::AnnounceLog)),
            RecordKind::File => self.fetch_record::<FileRecord>(&query, &values).await.map(|row| row.map(Record::File)),
            RecordKind::FileUser => self.fetch_record::<FileUserRecord>(&query, &values).await.map(|row| row.map(Record::FileUser)),
            RecordKind::User => self.fetch_record::<UserRecord>(&query, &values).await.map(|row| row.map(Record::User)),
        };
        match result {
            Ok(record) => record,
            Err(error) => {
                error!("{prefix} Unable to load {kind}: {error}");
                None
            }
        }
    }

    /// Distinct users active on the file who completed it and have nothing left.
    pub async fn seeders(&self, info_hash: &str) -> i64 {
        self.peer_count(info_hash, true).await
    }

    /// Distinct users active on the file who have not completed it yet.
    pub async fn leechers(&self, info_hash: &str) -> i64 {
        self.peer_count(info_hash, false).await
    }

    /// Compact peer list of at most `limit` active peers on `info_hash`, leaving out
    /// `exclude_ip` (normally the announcing peer itself).
    #[tracing::instrument(level = "debug")]
    pub async fn peer_list(&self, info_hash: &str, exclude_ip: &str, limit: u32) -> Vec<u8> {
        let _guard = self.in_flight.enter();
        let prefix = self.engine.log_prefix();
        let query = build_peer_list_query(self.engine);
        let values = [
            SqlValue::Bool(true),
            SqlValue::from(info_hash),
            SqlValue::from(exclude_ip),
            SqlValue::Int(i64::from(limit)),
        ];
        let rows: Result<Vec<(String, i64)>, sqlx::Error> = with_pool!(&self.pool, pool => {
            bind_values!(sqlx::query_as::<_, (String, i64)>(&query), values).fetch_all(pool).await
        });
        match rows {
            Ok(rows) => encode_compact_peers(rows.into_iter().filter_map(|(ip, port)| {
                debug!("{prefix} peer: [ip: {ip}, port: {port}]");
                match u16::try_from(port) {
                    Ok(port) => Some((ip, port)),
                    Err(_) => {
                        warn!("{prefix} Skipping peer {ip} with invalid port {port}");
                        None
                    }
                }
            })),
            Err(error) => {
                error!("{prefix} Unable to list peers of {info_hash}: {error}");
                Vec::new()
            }
        }
    }

    /// Total bytes the user uploaded over every file.
    pub async fn user_uploaded(&self, user_id: i64) -> i64 {
        self.user_total(user_id, "uploaded").await
    }

    /// Total bytes the user downloaded over every file.
    pub async fn user_downloaded(&self, user_id: i64) -> i64 {
        self.user_total(user_id, "downloaded").await
    }

    /// Waits for in-flight operations, then closes the pool.
    pub async fn close(&self) {
        self.in_flight.wait_idle(None).await;
        info!("{} stopping SqlDb", self.engine.log_prefix());
        self.pool.close().await;
    }

    fn save_statement(&self, record: &Record) -> (String, Vec<SqlValue>) {
        let now = current_time();
        match record {
            Record::AnnounceLog(log) => (
                build_insert_query(
                    self.engine,
                    "announce_log",
                    &["info_hash", "peer_id", "ip", "port", "uploaded", "downloaded", "left", "event", "time"],
                ),
                vec![
                    SqlValue::from(log.info_hash.as_str()),
                    SqlValue::from(log.peer_id.as_str()),
                    SqlValue::from(log.ip.as_str()),
                    SqlValue::Int(i64::from(log.port)),
                    SqlValue::Int(log.uploaded),
                    SqlValue::Int(log.downloaded),
                    SqlValue::Int(log.left),
                    SqlValue::from(log.event.as_str()),
                    SqlValue::Int(now),
                ],
            ),
            Record::File(file) => (
                build_upsert_query(
                    self.engine,
                    "files",
                    &["info_hash", "verified", "completed", "create_time", "update_time"],
                    &["info_hash"],
                    &["verified", "completed", "update_time"],
                ),
                vec![
                    SqlValue::from(file.info_hash.as_str()),
                    SqlValue::Bool(file.verified),
                    SqlValue::Int(file.completed),
                    SqlValue::Int(now),
                    SqlValue::Int(now),
                ],
            ),
            Record::FileUser(file_user) => (
                build_upsert_query(
                    self.engine,
                    "files_users",
                    &["file_id", "user_id", "active", "completed", "announced", "uploaded", "downloaded", "left", "time"],
                    &["file_id", "user_id"],
                    &["active", "completed", "announced", "uploaded", "downloaded", "left", "time"],
                ),
                vec![
                    SqlValue::Int(file_user.file_id),
                    SqlValue::Int(file_user.user_id),
                    SqlValue::Bool(file_user.active),
                    SqlValue::Bool(file_user.completed),
                    SqlValue::Int(file_user.announced),
                    SqlValue::Int(file_user.uploaded),
                    SqlValue::Int(file_user.downloaded),
                    SqlValue::Int(file_user.left),
                    SqlValue::Int(now),
                ],
            ),
            Record::User(user) => (
                build_upsert_query(
                    self.engine,
                    "users",
                    &["username", "passkey", "torrent_limit"],
                    &["username"],
                    &["passkey", "torrent_limit"],
                ),
                vec![
                    SqlValue::from(user.username.as_str()),
                    SqlValue::from(user.passkey.as_str()),
                    SqlValue::Int(user.torrent_limit),
                ],
            ),
        }
    }

    async fn peer_count(&self, info_hash: &str, seeders: bool) -> i64 {
        let _guard = self.in_flight.enter();
        let query = build_peer_count_query(self.engine, seeders);
        let values = [SqlValue::from(info_hash), SqlValue::Bool(true), SqlValue::Bool(seeders)];
        match self.fetch_scalar(&query, &values).await {
            Ok(count) => count,
            Err(error) => {
                error!("{} Unable to count peers of {info_hash}: {error}", self.engine.log_prefix());
                0
            }
        }
    }

    async fn user_total(&self, user_id: i64, column: &str) -> i64 {
        let _guard = self.in_flight.enter();
        let query = build_user_total_query(self.engine, column);
        match self.fetch_scalar(&query, &[SqlValue::Int(user_id)]).await {
            Ok(total) => total,
            Err(error) => {
                error!("{} Unable to sum {column} of user {user_id}: {error}", self.engine.log_prefix());
                0
            }
        }
    }

    async fn execute_in_transaction(&self, query: &str, values: &[SqlValue]) -> Result<(), sqlx::Error> {
        with_pool!(&self.pool, pool => {
            let mut transaction = pool.begin().await?;
            bind_values!(sqlx::query(query), values).execute(&mut *transaction).await?;
            transaction.commit().await
        })
    }

    async fn fetch_record<O>(&self, query: &str, values: &[SqlValue]) -> Result<Option<O>, sqlx::Error>
    where
        O: Send + Unpin
            + for<'r> FromRow<'r, SqliteRow>
            + for<'r> FromRow<'r, MySqlRow>
            + for<'r> FromRow<'r, PgRow>,
    {
        with_pool!(&self.pool, pool => {
            bind_values!(sqlx::query_as::<_, O>(query), values).fetch_optional(pool).await
        })
    }

    async fn fetch_scalar(&self, query: &str, values: &[SqlValue]) -> Result<i64, sqlx::Error> {
        with_pool!(&self.pool, pool => {
            bind_values!(sqlx::query_scalar::<_, i64>(query), values).fetch_one(pool).await
        })
    }
}
