/// Which backends receive traffic.
pub mod routing_mode;

/// Backend a routed request is handed to.
pub mod backend_target;
