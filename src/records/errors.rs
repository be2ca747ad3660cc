use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Encode error: {0}")]
    EncodeError(#[from] rmp_serde::encode::Error),

    #[error("Decode error: {0}")]
    DecodeError(#[from] rmp_serde::decode::Error),
}
