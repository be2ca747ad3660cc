use crate::storage::structs::in_flight_guard::InFlightGuard;

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.leave();
    }
}
