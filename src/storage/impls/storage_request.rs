use tokio::sync::oneshot;
use crate::records::enums::record::Record;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::lookup::Lookup;
use crate::storage::enums::request_action::RequestAction;
use crate::storage::enums::storage_response::StorageResponse;
use crate::storage::structs::storage_request::StorageRequest;

impl StorageRequest {
    pub fn write(record: Record) -> StorageRequest {
        StorageRequest {
            action: RequestAction::Write,
            kind: record.kind(),
            key: Some(record.key()),
            lookup: Some(record.identity_lookup()),
            data: Some(record),
            reply: None,
        }
    }

    /// Reads the record of `kind` whose natural identity is `identity`.
    pub fn read(kind: RecordKind, identity: &str) -> StorageRequest {
        StorageRequest {
            action: RequestAction::Read,
            kind,
            key: Some(kind.key_for(identity)),
            lookup: Lookup::from_identity(kind, identity),
            data: None,
            reply: None,
        }
    }

    /// Reads by arbitrary column conditions. Only identity lookups get a map store key.
    pub fn read_by(kind: RecordKind, lookup: Lookup) -> StorageRequest {
        StorageRequest {
            action: RequestAction::Read,
            kind,
            key: lookup.identity(kind).map(|identity| kind.key_for(&identity)),
            lookup: Some(lookup),
            data: None,
            reply: None,
        }
    }

    pub fn with_reply(mut self) -> (StorageRequest, oneshot::Receiver<StorageResponse>) {
        let (sender, receiver) = oneshot::channel();
        self.reply = Some(sender);
        (self, receiver)
    }

    pub fn is_write(&self) -> bool {
        self.data.is_some()
    }

    /// A copy of this request without the reply handle, used when a write fans out.
    pub fn duplicate(&self) -> StorageRequest {
        StorageRequest {
            action: self.action,
            kind: self.kind,
            key: self.key.clone(),
            lookup: self.lookup.clone(),
            data: self.data.clone(),
            reply: None,
        }
    }

    /// Answers the caller, if one is waiting. A caller that stopped waiting is not an error.
    pub fn respond(&mut self, response: StorageResponse) {
        if let Some(reply) = self.reply.take() {
            let _ = reply.send(response);
        }
    }
}
