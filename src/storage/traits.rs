/// Contract every storage backend fulfils.
pub mod storage_backend;
