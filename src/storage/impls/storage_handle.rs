use tokio::sync::oneshot;
use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::lookup::Lookup;
use crate::storage::enums::storage_response::StorageResponse;
use crate::storage::errors::StorageError;
use crate::storage::structs::storage_handle::StorageHandle;
use crate::storage::structs::storage_request::StorageRequest;

impl StorageHandle {
    /// Queues a request on the general stream. Waits while the stream is full.
    pub async fn submit(&self, request: StorageRequest) -> Result<(), StorageError> {
        self.general.send(request).await.map_err(|_| StorageError::Closed)
    }

    /// Queues a request on the persistent-intent stream.
    pub async fn submit_persistent(&self, request: StorageRequest) -> Result<(), StorageError> {
        self.persistent.send(request).await.map_err(|_| StorageError::Closed)
    }

    /// Writes through every enabled backend and waits for the authoritative answer.
    pub async fn write(&self, record: Record) -> Result<StorageResponse, StorageError> {
        let (request, receiver) = StorageRequest::write(record).with_reply();
        self.submit(request).await?;
        Self::await_response(receiver).await
    }

    pub async fn read(&self, kind: RecordKind, identity: &str) -> Result<StorageResponse, StorageError> {
        let (request, receiver) = StorageRequest::read(kind, identity).with_reply();
        self.submit(request).await?;
        Self::await_response(receiver).await
    }

    pub async fn read_by(&self, kind: RecordKind, lookup: Lookup) -> Result<StorageResponse, StorageError> {
        let (request, receiver) = StorageRequest::read_by(kind, lookup).with_reply();
        self.submit(request).await?;
        Self::await_response(receiver).await
    }

    /// Writes to the relational store only.
    pub async fn persist(&self, record: Record) -> Result<StorageResponse, StorageError> {
        let (request, receiver) = StorageRequest::write(record).with_reply();
        self.submit_persistent(request).await?;
        Self::await_response(receiver).await
    }

    /// Reads from the relational store only.
    pub async fn load(&self, kind: RecordKind, lookup: Lookup) -> Result<StorageResponse, StorageError> {
        let (request, receiver) = StorageRequest::read_by(kind, lookup).with_reply();
        self.submit_persistent(request).await?;
        Self::await_response(receiver).await
    }

    pub fn is_closed(&self) -> bool {
        self.general.is_closed() && self.persistent.is_closed()
    }

    async fn await_response(receiver: oneshot::Receiver<StorageResponse>) -> Result<StorageResponse, StorageError> {
        receiver.await.map_err(|_| StorageError::NoResponse)
    }
}
