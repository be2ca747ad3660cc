use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::file_user_record::FileUserRecord;
use crate::records::structs::lookup::Lookup;
use crate::records::traits::storable::Storable;

impl Storable for FileUserRecord {
    const KIND: RecordKind = RecordKind::FileUser;

    fn identity(&self) -> String {
        format!("{}_{}", self.file_id, self.user_id)
    }

    fn identity_lookup(&self) -> Lookup {
        Lookup::by_file_user(self.file_id, self.user_id)
    }

    fn into_record(self) -> Record {
        Record::FileUser(self)
    }
}
