use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::file_record::FileRecord;
use crate::records::structs::lookup::Lookup;
use crate::records::traits::storable::Storable;

impl Storable for FileRecord {
    const KIND: RecordKind = RecordKind::File;

    fn identity(&self) -> String {
        self.info_hash.clone()
    }

    fn identity_lookup(&self) -> Lookup {
        Lookup::by_info_hash(&self.info_hash)
    }

    fn into_record(self) -> Record {
        Record::File(self)
    }
}
