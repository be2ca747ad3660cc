use log::{debug, error, info, warn};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use crate::config::structs::storage_config::StorageConfig;
use crate::dispatcher::enums::backend_target::BackendTarget;
use crate::dispatcher::enums::routing_mode::RoutingMode;
use crate::dispatcher::structs::dispatcher::Dispatcher;
use crate::storage::enums::storage_response::StorageResponse;
use crate::storage::structs::backend_worker::BackendWorker;
use crate::storage::structs::storage_inbound::StorageInbound;
use crate::storage::structs::storage_request::StorageRequest;
use crate::storage::traits::storage_backend::StorageBackend;

const LOG_PREFIX: &str = "[DISPATCHER]";

impl Dispatcher {
    /// A backend that is enabled in `config` but not supplied is treated as disabled.
    pub fn new(
        config: StorageConfig,
        inbound: StorageInbound,
        map_backend: Option<Box<dyn StorageBackend>>,
        sql_backend: Option<Box<dyn StorageBackend>>,
        shutdown: watch::Receiver<bool>,
        done: oneshot::Sender<bool>,
    ) -> Dispatcher {
        if config.map_enabled && map_backend.is_none() {
            warn!("{LOG_PREFIX} Map store enabled but no map backend supplied");
        }
        if config.sql_enabled && sql_backend.is_none() {
            warn!("{LOG_PREFIX} Persistent store enabled but no persistent backend supplied");
        }
        let mode = RoutingMode::from_flags(
            config.map_enabled && map_backend.is_some(),
            config.sql_enabled && sql_backend.is_some(),
        );
        Dispatcher {
            config,
            mode,
            inbound: Some(inbound),
            map_backend,
            sql_backend,
            map_worker: None,
            sql_worker: None,
            shutdown,
            stopping: false,
            drain_until: None,
            undelivered: 0,
            done: Some(done),
        }
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    pub fn spawn(self) -> JoinHandle<bool> {
        tokio::spawn(self.run())
    }

    /// Routes until shutdown, then reports on the done channel. Returns the same flag.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn run(mut self) -> bool {
        let clean = match self.mode {
            RoutingMode::Disabled => self.idle().await,
            _ => self.route().await
        };
        if let Some(done) = self.done.take() {
            let _ = done.send(clean);
        }
        match clean {
            true => info!("{LOG_PREFIX} Storage stopped"),
            false => warn!("{LOG_PREFIX} Storage stopped after a dirty shutdown")
        }
        clean
    }

    async fn idle(&mut self) -> bool {
        self.inbound = None;
        self.map_backend = None;
        self.sql_backend = None;
        info!("{LOG_PREFIX} No storage backend in use.");
        Self::shutdown_signal(&mut self.shutdown).await;
        true
    }

    async fn route(&mut self) -> bool {
        let Some(mut inbound) = self.inbound.take() else {
            return true;
        };
        self.start_workers();
        info!("{LOG_PREFIX} Routing storage requests ({})", self.mode);

        let mut general_open = true;
        let mut persistent_open = true;
        loop {
            tokio::select! {
                biased;
                _ = Self::shutdown_signal(&mut self.shutdown) => break,
                request = inbound.general.recv(), if general_open => match request {
                    Some(request) => self.route_general(request).await,
                    None => general_open = false
                },
                request = inbound.persistent.recv(), if persistent_open => match request {
                    Some(request) => self.route_persistent(request).await,
                    None => persistent_open = false
                },
            }
        }

        self.begin_stopping();
        info!("{LOG_PREFIX} Shutting down, no longer accepting requests");
        inbound.general.close();
        inbound.persistent.close();
        let mut drained = 0usize;
        while let Some(request) = inbound.general.recv().await {
            self.route_general(request).await;
            drained += 1;
        }
        while let Some(request) = inbound.persistent.recv().await {
            self.route_persistent(request).await;
            drained += 1;
        }
        if drained > 0 {
            info!("{LOG_PREFIX} Routed {drained} request(s) accepted before shutdown");
        }
        if self.undelivered > 0 {
            warn!("{LOG_PREFIX} {} request(s) answered Failed, their backend was stuck", self.undelivered);
        }
        let stopped = self.stop_workers().await;
        stopped && self.undelivered == 0
    }

    /// Starts the drain window. Later deliveries are bounded by the shutdown deadline.
    fn begin_stopping(&mut self) {
        if !self.stopping {
            self.stopping = true;
            self.drain_until = Self::drain_window(&self.config);
        }
    }

    fn drain_window(config: &StorageConfig) -> Option<Instant> {
        config.shutdown_deadline().map(|deadline| Instant::now() + deadline)
    }

    /// Resolves once shutdown is signalled or the signal's sender is gone.
    async fn shutdown_signal(shutdown: &mut watch::Receiver<bool>) {
        let _ = shutdown.wait_for(|stop| *stop).await;
    }

    fn start_workers(&mut self) {
        if self.mode.uses_map() {
            if let Some(backend) = self.map_backend.take() {
                self.map_worker = Some(BackendWorker::spawn(backend, self.config.map_buffer));
            }
        }
        if self.mode.uses_sql() {
            if let Some(backend) = self.sql_backend.take() {
                self.sql_worker = Some(BackendWorker::spawn(backend, self.config.sql_buffer));
            }
        }
        self.map_backend = None;
        self.sql_backend = None;
    }

    /// Stops the map backend, then the persistent one, each bounded by the deadline.
    async fn stop_workers(&mut self) -> bool {
        let deadline = self.config.shutdown_deadline();
        let mut clean = true;
        for worker in [self.map_worker.take(), self.sql_worker.take()].into_iter().flatten() {
            info!("{LOG_PREFIX} Shutting down {}", worker.name());
            clean &= worker.stop(deadline).await;
        }
        if !clean {
            warn!("{LOG_PREFIX} Dirty shutdown, not every backend drained");
        }
        clean
    }

    async fn route_general(&mut self, mut request: StorageRequest) {
        match self.mode {
            RoutingMode::Both => {
                let persist = request.is_write().then(|| request.duplicate());
                self.forward(BackendTarget::Map, request).await;
                if let Some(copy) = persist {
                    self.forward(BackendTarget::Sql, copy).await;
                }
            }
            RoutingMode::MapOnly => self.forward(BackendTarget::Map, request).await,
            RoutingMode::SqlOnly => self.forward(BackendTarget::Sql, request).await,
            RoutingMode::Disabled => request.respond(StorageResponse::Failed)
        }
    }

    async fn route_persistent(&mut self, mut request: StorageRequest) {
        match self.mode {
            RoutingMode::Both | RoutingMode::SqlOnly => self.forward(BackendTarget::Sql, request).await,
            RoutingMode::MapOnly | RoutingMode::Disabled => {
                debug!("{LOG_PREFIX} No persistent backend, dropping {} request", request.kind);
                request.respond(StorageResponse::Failed);
            }
        }
    }

    /// Waits for buffer space in the target's queue; a full queue stalls the router.
    ///
    /// The wait gives way to the shutdown signal, after which it lasts at most until the
    /// drain window closes. A request that cannot be handed over answers `Failed`.
    async fn forward(&mut self, target: BackendTarget, mut request: StorageRequest) {
        let worker = match target {
            BackendTarget::Map => self.map_worker.as_ref(),
            BackendTarget::Sql => self.sql_worker.as_ref(),
        };
        let Some(worker) = worker else {
            request.respond(StorageResponse::Failed);
            return;
        };

        if !self.stopping {
            tokio::select! {
                biased;
                reserved = worker.reserve() => {
                    match reserved {
                        Ok(permit) => permit.send(request),
                        Err(_) => {
                            error!("{LOG_PREFIX} {} is gone, dropping {} request", worker.name(), request.kind);
                            request.respond(StorageResponse::Failed);
                        }
                    }
                    return;
                }
                _ = Self::shutdown_signal(&mut self.shutdown) => {
                    self.stopping = true;
                    self.drain_until = Self::drain_window(&self.config);
                }
            }
        }

        let reserved = match self.drain_until {
            Some(until) => match tokio::time::timeout_at(until, worker.reserve()).await {
                Ok(reserved) => reserved,
                Err(_) => {
                    warn!("{LOG_PREFIX} {} did not accept a {} request before the shutdown deadline", worker.name(), request.kind);
                    self.undelivered += 1;
                    request.respond(StorageResponse::Failed);
                    return;
                }
            },
            None => worker.reserve().await
        };
        match reserved {
            Ok(permit) => permit.send(request),
            Err(_) => {
                error!("{LOG_PREFIX} {} is gone, dropping {} request", worker.name(), request.kind);
                request.respond(StorageResponse::Failed);
            }
        }
    }
}
