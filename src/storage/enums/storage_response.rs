use crate::records::enums::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageResponse {
    Found(Record),
    NotFound,
    Stored,
    Failed,
    /// The backend does not keep this kind of record and ignored the request.
    Skipped,
}
