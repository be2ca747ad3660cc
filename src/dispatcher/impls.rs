pub mod dispatcher;
pub mod routing_mode;
