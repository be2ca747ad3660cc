/// The sharded map backend.
pub mod map_db;
