use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::lookup::Lookup;
use crate::records::structs::user_record::UserRecord;
use crate::records::traits::storable::Storable;

impl Storable for UserRecord {
    const KIND: RecordKind = RecordKind::User;

    fn identity(&self) -> String {
        self.username.clone()
    }

    fn identity_lookup(&self) -> Lookup {
        Lookup::by_username(&self.username)
    }

    fn into_record(self) -> Record {
        Record::User(self)
    }
}
