use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::errors::RecordError;
use crate::records::structs::announce_log::AnnounceLog;
use crate::records::structs::file_record::FileRecord;
use crate::records::structs::file_user_record::FileUserRecord;
use crate::records::structs::lookup::Lookup;
use crate::records::structs::user_record::UserRecord;
use crate::records::traits::storable::Storable;

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::AnnounceLog(_) => RecordKind::AnnounceLog,
            Record::File(_) => RecordKind::File,
            Record::FileUser(_) => RecordKind::FileUser,
            Record::User(_) => RecordKind::User,
        }
    }

    pub fn identity(&self) -> String {
        match self {
            Record::AnnounceLog(record) => record.identity(),
            Record::File(record) => record.identity(),
            Record::FileUser(record) => record.identity(),
            Record::User(record) => record.identity(),
        }
    }

    pub fn identity_lookup(&self) -> Lookup {
        match self {
            Record::AnnounceLog(record) => record.identity_lookup(),
            Record::File(record) => record.identity_lookup(),
            Record::FileUser(record) => record.identity_lookup(),
            Record::User(record) => record.identity_lookup(),
        }
    }

    pub fn key(&self) -> String {
        self.kind().key_for(&self.identity())
    }

    pub fn encode(&self) -> Result<Vec<u8>, RecordError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    pub fn decode(data: &[u8]) -> Result<Record, RecordError> {
        Ok(rmp_serde::from_slice(data)?)
    }
}

impl From<AnnounceLog> for Record {
    fn from(record: AnnounceLog) -> Self {
        record.into_record()
    }
}

impl From<FileRecord> for Record {
    fn from(record: FileRecord) -> Self {
        record.into_record()
    }
}

impl From<FileUserRecord> for Record {
    fn from(record: FileUserRecord) -> Self {
        record.into_record()
    }
}

impl From<UserRecord> for Record {
    fn from(record: UserRecord) -> Self {
        record.into_record()
    }
}
