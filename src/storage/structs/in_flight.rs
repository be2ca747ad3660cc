use std::sync::atomic::AtomicU64;
use tokio::sync::Notify;

/// Replaces a polled busy flag: waiters are woken when the count drops to zero.
#[derive(Debug, Default)]
pub struct InFlight {
    pub(crate) count: AtomicU64,
    pub(crate) idle: Notify,
}
