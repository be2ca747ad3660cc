use crate::records::enums::lookup_value::LookupValue;
use crate::sql_db::enums::sql_value::SqlValue;

impl From<&LookupValue> for SqlValue {
    fn from(value: &LookupValue) -> Self {
        match value {
            LookupValue::Int(value) => SqlValue::Int(*value),
            LookupValue::Text(value) => SqlValue::Text(value.clone()),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}
