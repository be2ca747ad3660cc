pub mod backend_worker;
pub mod in_flight;
pub mod in_flight_guard;
pub mod storage_channels;
pub mod storage_handle;
pub mod storage_request;
