use serde::{Deserialize, Serialize};
use crate::records::structs::announce_log::AnnounceLog;
use crate::records::structs::file_record::FileRecord;
use crate::records::structs::file_user_record::FileUserRecord;
use crate::records::structs::user_record::UserRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Record {
    AnnounceLog(AnnounceLog),
    File(FileRecord),
    FileUser(FileUserRecord),
    User(UserRecord),
}
