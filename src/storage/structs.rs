/// A unit of work submitted to the dispatcher.
pub mod storage_request;
/// Constructor for the paired producer/consumer ends of the inbound streams.
pub mod storage_channels;
/// Cloneable producer end of the inbound streams.
pub mod storage_handle;
/// Consumer end of the inbound streams, owned by the dispatcher.
pub mod storage_inbound;
/// Counter of operations currently running inside a backend.
pub mod in_flight;
/// RAII registration of one in-flight operation.
pub mod in_flight_guard;
/// A backend running on its own task behind a bounded channel.
pub mod backend_worker;
