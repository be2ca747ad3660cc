#![allow(dead_code)]
use rand::RngExt;
use tempfile::TempDir;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use torrust_storage::config::structs::database_config::DatabaseConfig;
use torrust_storage::config::structs::storage_config::StorageConfig;
use torrust_storage::dispatcher::enums::routing_mode::RoutingMode;
use torrust_storage::dispatcher::structs::dispatcher::Dispatcher;
use torrust_storage::map_db::structs::map_db::MapDb;
use torrust_storage::records::enums::record::Record;
use torrust_storage::records::structs::announce_log::AnnounceLog;
use torrust_storage::records::structs::file_record::FileRecord;
use torrust_storage::records::structs::file_user_record::FileUserRecord;
use torrust_storage::records::structs::user_record::UserRecord;
use torrust_storage::sql_db::enums::database_drivers::DatabaseDrivers;
use torrust_storage::sql_db::structs::sql_db::SqlDb;
use torrust_storage::storage::structs::storage_channels::StorageChannels;
use torrust_storage::storage::structs::storage_handle::StorageHandle;
use torrust_storage::storage::traits::storage_backend::StorageBackend;

pub struct RunningStorage {
    pub handle: StorageHandle,
    pub mode: RoutingMode,
    shutdown: watch::Sender<bool>,
    done: oneshot::Receiver<bool>,
    task: JoinHandle<bool>,
}

impl RunningStorage {
    /// Signals shutdown and returns what the dispatcher reported on its done channel.
    pub async fn stop(self) -> bool {
        let _ = self.shutdown.send(true);
        let reported = self.done.await.expect("dispatcher reports on its done channel");
        let returned = self.task.await.expect("dispatcher task does not panic");
        assert_eq!(reported, returned);
        reported
    }
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_storage_config(map_enabled: bool, sql_enabled: bool) -> StorageConfig {
    StorageConfig {
        map_enabled,
        sql_enabled,
        capacity: 256,
        request_buffer: 16,
        map_buffer: 8,
        sql_buffer: 1,
        shutdown_deadline: 10,
    }
}

pub fn create_test_database_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        engine: DatabaseDrivers::sqlite3,
        path: format!("sqlite://{}", dir.path().join("tracker.db").display()),
        create_tables: true,
    }
}

pub fn create_test_sql_db(dir: &TempDir) -> SqlDb {
    SqlDb::new(&create_test_database_config(dir)).expect("sqlite options parse")
}

/// Starts a dispatcher over real backends for the enabled stores.
pub fn start_storage(config: StorageConfig, dir: &TempDir) -> RunningStorage {
    let map_backend: Option<Box<dyn StorageBackend>> = match config.map_enabled {
        true => Some(Box::new(MapDb::from_config(&config))),
        false => None
    };
    let sql_backend: Option<Box<dyn StorageBackend>> = match config.sql_enabled {
        true => Some(Box::new(create_test_sql_db(dir))),
        false => None
    };
    start_storage_with(config, map_backend, sql_backend)
}

pub fn start_storage_with(
    config: StorageConfig,
    map_backend: Option<Box<dyn StorageBackend>>,
    sql_backend: Option<Box<dyn StorageBackend>>,
) -> RunningStorage {
    let (handle, inbound) = StorageChannels::new(config.request_buffer);
    let (shutdown, shutdown_rx) = watch::channel(false);
    let (done_tx, done) = oneshot::channel();
    let dispatcher = Dispatcher::new(config, inbound, map_backend, sql_backend, shutdown_rx, done_tx);
    let mode = dispatcher.mode();
    RunningStorage {
        handle,
        mode,
        shutdown,
        done,
        task: dispatcher.spawn(),
    }
}

pub fn random_info_hash() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    hex::encode(bytes)
}

pub fn random_peer_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 10] = rng.random();
    hex::encode(bytes)
}

pub fn create_test_file(info_hash: &str, completed: i64) -> Record {
    Record::File(FileRecord {
        info_hash: info_hash.to_string(),
        verified: true,
        completed,
        ..Default::default()
    })
}

pub fn create_test_file_user(file_id: i64, user_id: i64, left: i64) -> Record {
    Record::FileUser(FileUserRecord {
        file_id,
        user_id,
        active: true,
        completed: left == 0,
        left,
        uploaded: 1024,
        downloaded: 512,
        ..Default::default()
    })
}

pub fn create_test_announce(info_hash: &str, ip: &str, port: u16) -> Record {
    Record::AnnounceLog(AnnounceLog {
        info_hash: info_hash.to_string(),
        peer_id: random_peer_id(),
        ip: ip.to_string(),
        port,
        left: 1000,
        event: String::from("started"),
        ..Default::default()
    })
}

pub fn create_test_user(username: &str) -> Record {
    Record::User(UserRecord {
        username: username.to_string(),
        passkey: random_info_hash(),
        torrent_limit: 10,
        ..Default::default()
    })
}
