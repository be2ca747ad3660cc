//! Requests, responses and the backend contract shared by the dispatcher and the stores.
//!
//! Producers hold a [`StorageHandle`](structs::storage_handle::StorageHandle) and submit
//! [`StorageRequest`](structs::storage_request::StorageRequest)s on one of two inbound
//! streams: the general stream (reads and write-through writes) and the persistent-intent
//! stream (requests meant for the relational store only). The dispatcher owns the
//! matching [`StorageInbound`](structs::storage_inbound::StorageInbound) receivers.
//!
//! Every backend implements [`StorageBackend`](traits::storage_backend::StorageBackend)
//! and runs inside its own [`BackendWorker`](structs::backend_worker::BackendWorker),
//! which consumes requests one at a time until its channel closes.

pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;
