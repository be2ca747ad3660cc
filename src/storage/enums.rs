/// Whether a request reads or writes.
pub mod request_action;
/// Answer delivered on a request's reply handle.
pub mod storage_response;
