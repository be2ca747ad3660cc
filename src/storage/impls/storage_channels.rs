use tokio::sync::mpsc;
use crate::storage::structs::storage_channels::StorageChannels;
use crate::storage::structs::storage_handle::StorageHandle;
use crate::storage::structs::storage_inbound::StorageInbound;

impl StorageChannels {
    /// Creates both inbound streams, each bounded to `capacity` queued requests.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(capacity: usize) -> (StorageHandle, StorageInbound) {
        let (general_sender, general_receiver) = mpsc::channel(capacity.max(1));
        let (persistent_sender, persistent_receiver) = mpsc::channel(capacity.max(1));
        (
            StorageHandle {
                general: general_sender,
                persistent: persistent_sender,
            },
            StorageInbound {
                general: general_receiver,
                persistent: persistent_receiver,
            },
        )
    }
}
