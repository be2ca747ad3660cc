use async_trait::async_trait;
use log::warn;
use crate::map_db::map_db::LOG_PREFIX;
use crate::map_db::structs::map_db::MapDb;
use crate::storage::enums::storage_response::StorageResponse;
use crate::storage::structs::storage_request::StorageRequest;
use crate::storage::traits::storage_backend::StorageBackend;

#[async_trait]
impl StorageBackend for MapDb {
    fn name(&self) -> &'static str {
        "MapDb"
    }

    async fn init(&mut self) {
        self.start().await;
    }

    async fn read(&mut self, request: &StorageRequest) -> StorageResponse {
        match request.key.as_deref() {
            Some(key) => self.get(request.kind, key).await,
            None => StorageResponse::NotFound
        }
    }

    async fn write(&mut self, request: &StorageRequest) -> StorageResponse {
        match request.data.as_ref() {
            Some(record) => self.put(record).await,
            None => {
                warn!("{LOG_PREFIX} Write of {} without a payload", request.kind);
                StorageResponse::Failed
            }
        }
    }

    async fn shutdown(&mut self) {
        self.stop().await;
    }
}
