use crate::records::enums::lookup_value::LookupValue;
use crate::records::enums::record_kind::RecordKind;
use crate::records::structs::lookup::Lookup;

impl Lookup {
    pub fn new(column: &str, value: impl Into<LookupValue>) -> Lookup {
        Lookup { conditions: vec![(column.to_string(), value.into())] }
    }

    pub fn and(mut self, column: &str, value: impl Into<LookupValue>) -> Lookup {
        self.conditions.push((column.to_string(), value.into()));
        self
    }

    pub fn by_id(id: i64) -> Lookup {
        Lookup::new("id", id)
    }

    pub fn by_info_hash(info_hash: &str) -> Lookup {
        Lookup::new("info_hash", info_hash)
    }

    pub fn by_file_user(file_id: i64, user_id: i64) -> Lookup {
        Lookup::new("file_id", file_id).and("user_id", user_id)
    }

    pub fn by_username(username: &str) -> Lookup {
        Lookup::new("username", username)
    }

    /// Rebuilds the identity conditions of `kind` from an identity string, the inverse
    /// of [`Lookup::identity`]. Composite identities must be `<file_id>_<user_id>`.
    pub fn from_identity(kind: RecordKind, identity: &str) -> Option<Lookup> {
        match kind {
            RecordKind::AnnounceLog | RecordKind::File => Some(Lookup::by_info_hash(identity)),
            RecordKind::User => Some(Lookup::by_username(identity)),
            RecordKind::FileUser => {
                let (file_id, user_id) = identity.split_once('_')?;
                Some(Lookup::by_file_user(file_id.parse().ok()?, user_id.parse().ok()?))
            }
        }
    }

    pub fn conditions(&self) -> &[(String, LookupValue)] {
        &self.conditions
    }

    /// The record identity this lookup addresses, if its conditions are exactly the
    /// identity columns of `kind` in any order. Only such lookups can be answered by the
    /// map store.
    pub fn identity(&self, kind: RecordKind) -> Option<String> {
        let columns = kind.identity_columns();
        if columns.len() != self.conditions.len() {
            return None;
        }
        let parts = columns
            .iter()
            .map(|expected| {
                self.conditions
                    .iter()
                    .find(|(column, _)| column == expected)
                    .map(|(_, value)| value.to_string())
            })
            .collect::<Option<Vec<String>>>()?;
        Some(parts.join("_"))
    }

    /// Column names this lookup refers to that do not exist on `kind`.
    pub fn unknown_columns(&self, kind: RecordKind) -> Vec<&str> {
        self.conditions
            .iter()
            .map(|(column, _)| column.as_str())
            .filter(|column| !kind.has_column(column))
            .collect()
    }
}
