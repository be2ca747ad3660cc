use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage dispatcher is closed")]
    Closed,

    #[error("Request was dropped without a response")]
    NoResponse,
}
