//! Record data structures.

/// One announce made by a peer, as logged to `announce_log`.
pub mod announce_log;

/// A file (torrent) tracked by the tracker, stored in `files`.
pub mod file_record;

/// Relation between a file and a user, stored in `files_users`.
pub mod file_user_record;

/// A tracker user, stored in `users`.
pub mod user_record;

/// Column/value equality conditions used for point lookups.
pub mod lookup;
