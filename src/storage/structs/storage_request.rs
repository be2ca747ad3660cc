use tokio::sync::oneshot;
use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::lookup::Lookup;
use crate::storage::enums::request_action::RequestAction;
use crate::storage::enums::storage_response::StorageResponse;

/// A request carries a payload only when it writes; a request without `data` is a read.
///
/// `key` is the map store key when the request addresses a record by its identity;
/// lookups on other columns leave it empty and can only be answered by the relational store.
#[derive(Debug)]
pub struct StorageRequest {
    pub action: RequestAction,
    pub kind: RecordKind,
    pub key: Option<String>,
    pub lookup: Option<Lookup>,
    pub data: Option<Record>,
    pub reply: Option<oneshot::Sender<StorageResponse>>,
}
