use async_trait::async_trait;
use log::{info, warn};
use crate::sql_db::structs::sql_db::SqlDb;
use crate::storage::enums::storage_response::StorageResponse;
use crate::storage::structs::storage_request::StorageRequest;
use crate::storage::traits::storage_backend::StorageBackend;

#[async_trait]
impl StorageBackend for SqlDb {
    fn name(&self) -> &'static str {
        "SqlDb"
    }

    async fn init(&mut self) {
        if self.create_tables && self.create_tables().await {
            self.create_tables = false;
        }
        info!("{} Persistent store ready", self.engine.log_prefix());
    }

    async fn read(&mut self, request: &StorageRequest) -> StorageResponse {
        let Some(lookup) = request.lookup.as_ref() else {
            warn!("{} Read of {} without lookup conditions", self.engine.log_prefix(), request.kind);
            return StorageResponse::NotFound;
        };
        match self.load(request.kind, lookup).await {
            Some(record) => StorageResponse::Found(record),
            None => StorageResponse::NotFound
        }
    }

    async fn write(&mut self, request: &StorageRequest) -> StorageResponse {
        let Some(record) = request.data.as_ref() else {
            warn!("{} Write of {} without a payload", self.engine.log_prefix(), request.kind);
            return StorageResponse::Failed;
        };
        match self.save(record).await {
            true => StorageResponse::Stored,
            false => StorageResponse::Failed
        }
    }

    async fn shutdown(&mut self) {
        self.close().await;
    }
}
