use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::lookup::Lookup;

/// Capability shared by every record: a stable identity and the key derived from it.
pub trait Storable {
    const KIND: RecordKind;

    /// Natural identity, joined with `_` when it spans several columns.
    fn identity(&self) -> String;

    /// Equality conditions on the identity columns.
    fn identity_lookup(&self) -> Lookup;

    fn key(&self) -> String {
        Self::KIND.key_for(&self.identity())
    }

    fn into_record(self) -> Record;
}
