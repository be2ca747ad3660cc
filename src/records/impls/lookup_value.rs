use std::fmt;
use std::fmt::Formatter;
use crate::records::enums::lookup_value::LookupValue;

impl fmt::Display for LookupValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LookupValue::Int(value) => write!(f, "{value}"),
            LookupValue::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for LookupValue {
    fn from(value: i64) -> Self {
        LookupValue::Int(value)
    }
}

impl From<&str> for LookupValue {
    fn from(value: &str) -> Self {
        LookupValue::Text(value.to_string())
    }
}

impl From<String> for LookupValue {
    fn from(value: String) -> Self {
        LookupValue::Text(value)
    }
}
