use std::fmt;
use std::fmt::Formatter;
use crate::dispatcher::enums::routing_mode::RoutingMode;

impl RoutingMode {
    pub fn from_flags(map_enabled: bool, sql_enabled: bool) -> RoutingMode {
        match (map_enabled, sql_enabled) {
            (true, true) => RoutingMode::Both,
            (true, false) => RoutingMode::MapOnly,
            (false, true) => RoutingMode::SqlOnly,
            (false, false) => RoutingMode::Disabled,
        }
    }

    pub fn uses_map(&self) -> bool {
        matches!(self, RoutingMode::Both | RoutingMode::MapOnly)
    }

    pub fn uses_sql(&self) -> bool {
        matches!(self, RoutingMode::Both | RoutingMode::SqlOnly)
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RoutingMode::Both => write!(f, "map and sql"),
            RoutingMode::MapOnly => write!(f, "map only"),
            RoutingMode::SqlOnly => write!(f, "sql only"),
            RoutingMode::Disabled => write!(f, "disabled"),
        }
    }
}
