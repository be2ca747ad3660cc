use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio::sync::{oneshot, watch};
use tokio_shutdown::Shutdown;
use torrust_storage::common::common::setup_logging;
use torrust_storage::config::structs::configuration::Configuration;
use torrust_storage::dispatcher::structs::dispatcher::Dispatcher;
use torrust_storage::map_db::structs::map_db::MapDb;
use torrust_storage::sql_db::structs::sql_db::SqlDb;
use torrust_storage::storage::structs::storage_channels::StorageChannels;
use torrust_storage::storage::traits::storage_backend::StorageBackend;
use torrust_storage::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let storage_config = config.storage.clone();

            if args.create_database {
                let created = match SqlDb::new(&config.database) {
                    Ok(sql_db) => {
                        let created = sql_db.create_tables().await;
                        sql_db.close().await;
                        created
                    }
                    Err(error) => {
                        error!("[BOOT] Unable to configure the persistent store: {error}");
                        false
                    }
                };
                if created {
                    info!("[BOOT] Database tables created, exiting now...");
                    exit(0);
                }
                exit(1);
            }

            let sql_backend: Option<Box<dyn StorageBackend>> = if storage_config.sql_enabled {
                match SqlDb::new(&config.database) {
                    Ok(sql_db) => {
                        info!("[BOOT] Persistent store using {}", sql_db.engine());
                        Some(Box::new(sql_db))
                    }
                    Err(error) => {
                        sentry::capture_error(&error);
                        error!("[BOOT] Unable to configure the persistent store: {error}");
                        exit(1);
                    }
                }
            } else {
                None
            };

            let map_backend: Option<Box<dyn StorageBackend>> = if storage_config.map_enabled {
                let map_db = MapDb::from_config(&storage_config);
                info!("[BOOT] Map store sized for {} keys with trie depth {}", storage_config.capacity, map_db.depth());
                Some(Box::new(map_db))
            } else {
                None
            };

            let (handle, inbound) = StorageChannels::new(storage_config.request_buffer);
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let (done_tx, done_rx) = oneshot::channel();

            let dispatcher = Dispatcher::new(storage_config, inbound, map_backend, sql_backend, shutdown_rx, done_tx);
            info!("[BOOT] Starting dispatcher in {} mode", dispatcher.mode());
            let dispatcher_handle = dispatcher.spawn();

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
            tokio_shutdown.handle().await;

            info!("Shutdown request received, shutting down...");
            drop(handle);
            let _ = shutdown_tx.send(true);

            match done_rx.await {
                Ok(true) => info!("[BOOT] Storage backends stopped cleanly"),
                Ok(false) => warn!("[BOOT] Storage backends stopped after the shutdown deadline"),
                Err(_) => warn!("[BOOT] Dispatcher exited without reporting"),
            }

            if let Err(error) = dispatcher_handle.await {
                sentry::capture_error(&error);
                error!("[BOOT] Dispatcher task failed: {error}");
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
