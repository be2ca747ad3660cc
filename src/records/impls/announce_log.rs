use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::announce_log::AnnounceLog;
use crate::records::structs::lookup::Lookup;
use crate::records::traits::storable::Storable;

impl Storable for AnnounceLog {
    const KIND: RecordKind = RecordKind::AnnounceLog;

    fn identity(&self) -> String {
        self.info_hash.clone()
    }

    fn identity_lookup(&self) -> Lookup {
        Lookup::by_info_hash(&self.info_hash)
    }

    fn into_record(self) -> Record {
        Record::AnnounceLog(self)
    }
}
