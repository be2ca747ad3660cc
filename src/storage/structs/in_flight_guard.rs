use crate::storage::structs::in_flight::InFlight;

#[derive(Debug)]
pub struct InFlightGuard<'a> {
    pub(crate) in_flight: &'a InFlight,
}
