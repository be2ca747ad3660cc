use async_trait::async_trait;
use crate::storage::enums::request_action::RequestAction;
use crate::storage::enums::storage_response::StorageResponse;
use crate::storage::structs::storage_request::StorageRequest;

/// A store the dispatcher can route to.
///
/// Backends recover from their own failures: an operation that cannot be performed
/// answers [`StorageResponse::Failed`] and never panics or blocks the worker.
#[async_trait]
pub trait StorageBackend: Send + 'static {
    fn name(&self) -> &'static str;

    /// Prepares the backend. Must be idempotent.
    async fn init(&mut self);

    async fn read(&mut self, request: &StorageRequest) -> StorageResponse;

    async fn write(&mut self, request: &StorageRequest) -> StorageResponse;

    /// Waits for in-flight work, then releases the backend's storage.
    async fn shutdown(&mut self);

    async fn handle(&mut self, mut request: StorageRequest) {
        let response = match request.action {
            RequestAction::Read => self.read(&request).await,
            RequestAction::Write => self.write(&request).await,
        };
        request.respond(response);
    }
}
