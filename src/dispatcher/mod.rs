//! Request router between producers and the storage backends.
//!
//! The [`Dispatcher`](structs::dispatcher::Dispatcher) owns the inbound streams and
//! forwards each request according to its [`RoutingMode`](enums::routing_mode::RoutingMode):
//!
//! | mode | general read | general write | persistent-intent |
//! |---|---|---|---|
//! | `Both` | map | map, then sql | sql |
//! | `MapOnly` | map | map | dropped, answers `Failed` |
//! | `SqlOnly` | sql | sql | sql |
//! | `Disabled` | refused | refused | refused |
//!
//! On the shutdown signal it stops accepting requests, routes what was already queued,
//! then stops the map backend before the persistent one and reports on its done channel.

pub mod enums;
pub mod impls;
pub mod structs;
