use serde::{Deserialize, Serialize};
use crate::records::enums::lookup_value::LookupValue;

/// Equality conditions joined with `AND`, in the order they were added.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub(crate) conditions: Vec<(String, LookupValue)>,
}
