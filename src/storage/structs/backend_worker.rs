use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::storage::structs::storage_request::StorageRequest;

#[derive(Debug)]
pub struct BackendWorker {
    pub(crate) name: &'static str,
    pub(crate) sender: mpsc::Sender<StorageRequest>,
    pub(crate) handle: JoinHandle<()>,
}
