use std::fmt;
use std::fmt::Formatter;
use crate::common::common::sha1_hex;
use crate::records::enums::record_kind::RecordKind;

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::AnnounceLog,
        RecordKind::File,
        RecordKind::FileUser,
        RecordKind::User,
    ];

    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::AnnounceLog => "announce_log",
            RecordKind::File => "files",
            RecordKind::FileUser => "files_users",
            RecordKind::User => "users",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::AnnounceLog => &["id", "info_hash", "peer_id", "ip", "port", "uploaded", "downloaded", "left", "event", "time"],
            RecordKind::File => &["id", "info_hash", "verified", "completed", "create_time", "update_time"],
            RecordKind::FileUser => &["file_id", "user_id", "active", "completed", "announced", "uploaded", "downloaded", "left", "time"],
            RecordKind::User => &["id", "username", "passkey", "torrent_limit"],
        }
    }

    pub fn identity_columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::AnnounceLog | RecordKind::File => &["info_hash"],
            RecordKind::FileUser => &["file_id", "user_id"],
            RecordKind::User => &["username"],
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }

    /// Whether the sharded map store keeps this kind. Users live in the relational store only.
    pub fn is_map_stored(&self) -> bool {
        !matches!(self, RecordKind::User)
    }

    pub fn key_for(&self, identity: &str) -> String {
        sha1_hex(self.table_name(), identity)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}
