use tokio::sync::mpsc;
use crate::storage::structs::storage_request::StorageRequest;

#[derive(Debug)]
pub struct StorageInbound {
    pub(crate) general: mpsc::Receiver<StorageRequest>,
    pub(crate) persistent: mpsc::Receiver<StorageRequest>,
}
