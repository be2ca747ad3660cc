//! Implementation blocks for record types.

pub mod announce_log;
pub mod file_record;
pub mod file_user_record;
pub mod lookup;
pub mod lookup_value;
pub mod record;
pub mod record_kind;
pub mod user_record;
