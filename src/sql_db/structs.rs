/// The relational backend.
pub mod sql_db;
