use tokio::sync::mpsc;
use crate::storage::structs::storage_request::StorageRequest;

#[derive(Debug, Clone)]
pub struct StorageHandle {
    pub(crate) general: mpsc::Sender<StorageRequest>,
    pub(crate) persistent: mpsc::Sender<StorageRequest>,
}
