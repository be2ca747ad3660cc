use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use crate::storage::structs::in_flight::InFlight;
use crate::storage::structs::in_flight_guard::InFlightGuard;

impl InFlight {
    pub fn new() -> InFlight {
        InFlight {
            count: AtomicU64::new(0),
            idle: Notify::new(),
        }
    }

    /// Registers one operation until the returned guard is dropped.
    pub fn enter(&self) -> InFlightGuard<'_> {
        self.count.fetch_add(1, Ordering::AcqRel);
        InFlightGuard { in_flight: self }
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    pub fn is_busy(&self) -> bool {
        self.count() > 0
    }

    /// Waits until no operation is in flight. Returns `false` if `deadline` expired first.
    pub async fn wait_idle(&self, deadline: Option<Duration>) -> bool {
        let wait = async {
            loop {
                let notified = self.idle.notified();
                tokio::pin!(notified);
                notified.as_mut().enable();
                if !self.is_busy() {
                    return;
                }
                notified.await;
            }
        };
        match deadline {
            None => {
                wait.await;
                true
            }
            Some(deadline) => tokio::time::timeout(deadline, wait).await.is_ok()
        }
    }

    pub(crate) fn leave(&self) {
        if self.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.idle.notify_waiters();
        }
    }
}
