use tokio::sync::{oneshot, watch};
use tokio::time::Instant;
use crate::config::structs::storage_config::StorageConfig;
use crate::dispatcher::enums::routing_mode::RoutingMode;
use crate::storage::structs::backend_worker::BackendWorker;
use crate::storage::structs::storage_inbound::StorageInbound;
use crate::storage::traits::storage_backend::StorageBackend;

pub struct Dispatcher {
    pub(crate) config: StorageConfig,
    pub(crate) mode: RoutingMode,
    pub(crate) inbound: Option<StorageInbound>,
    pub(crate) map_backend: Option<Box<dyn StorageBackend>>,
    pub(crate) sql_backend: Option<Box<dyn StorageBackend>>,
    pub(crate) map_worker: Option<BackendWorker>,
    pub(crate) sql_worker: Option<BackendWorker>,
    /// Flips to `true` once the process shuts down.
    pub(crate) shutdown: watch::Receiver<bool>,
    /// Set once the shutdown signal has been seen.
    pub(crate) stopping: bool,
    /// Last moment a request may still be handed to a backend while stopping.
    pub(crate) drain_until: Option<Instant>,
    /// Requests answered `Failed` because their backend did not accept them in time.
    pub(crate) undelivered: usize,
    /// Receives `true` after a clean shutdown, `false` when a backend missed its deadline.
    pub(crate) done: Option<oneshot::Sender<bool>>,
}
