use std::time::Duration;
use log::{debug, error, warn};
use tokio::sync::mpsc;
use crate::storage::structs::backend_worker::BackendWorker;
use crate::storage::structs::storage_request::StorageRequest;
use crate::storage::traits::storage_backend::StorageBackend;

impl BackendWorker {
    /// Starts `backend` on its own task behind a channel of `buffer` slots.
    ///
    /// The task initializes the backend once, handles requests in arrival order and,
    /// once every sender is gone and the queue is drained, shuts the backend down.
    pub fn spawn(mut backend: Box<dyn StorageBackend>, buffer: usize) -> BackendWorker {
        let name = backend.name();
        let (sender, mut receiver) = mpsc::channel::<StorageRequest>(buffer.max(1));
        let handle = tokio::spawn(async move {
            backend.init().await;
            while let Some(request) = receiver.recv().await {
                backend.handle(request).await;
            }
            backend.shutdown().await;
            debug!("[{name}] Worker stopped");
        });
        BackendWorker {
            name,
            sender,
            handle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Queues a request, waiting while the buffer is full. Gives the request back if
    /// the worker is gone.
    pub async fn send(&self, request: StorageRequest) -> Result<(), StorageRequest> {
        self.sender.send(request).await.map_err(|error| error.0)
    }

    /// Waits for a free slot in the queue without handing over a request yet, so a caller
    /// that gives up waiting still owns its request.
    pub async fn reserve(&self) -> Result<mpsc::Permit<'_, StorageRequest>, mpsc::error::SendError<()>> {
        self.sender.reserve().await
    }

    /// Closes the queue and waits for the worker to drain and shut its backend down.
    ///
    /// Returns `false` when the worker panicked or `deadline` expired; in the latter case
    /// the worker is aborted and its backend never finishes shutting down.
    pub async fn stop(self, deadline: Option<Duration>) -> bool {
        let BackendWorker { name, sender, mut handle } = self;
        drop(sender);
        let joined = match deadline {
            None => handle.await,
            Some(deadline) => match tokio::time::timeout(deadline, &mut handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!("[{name}] Backend did not drain within {}s, dirty shutdown", deadline.as_secs_f64());
                    handle.abort();
                    return false;
                }
            }
        };
        match joined {
            Ok(()) => true,
            Err(error) => {
                error!("[{name}] Worker failed: {error}");
                false
            }
        }
    }
}
