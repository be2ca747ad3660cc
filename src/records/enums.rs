//! Record enumerations.

/// Closed variant over every storable record.
pub mod record;

/// Discriminant of [`record::Record`], carrying table level metadata.
pub mod record_kind;

/// Typed value of a lookup condition.
pub mod lookup_value;
