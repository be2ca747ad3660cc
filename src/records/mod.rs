//! Record types exchanged between the router and the storage backends.
//!
//! Four entities are stored: [`AnnounceLog`](structs::announce_log::AnnounceLog),
//! [`FileRecord`](structs::file_record::FileRecord),
//! [`FileUserRecord`](structs::file_user_record::FileUserRecord) and
//! [`UserRecord`](structs::user_record::UserRecord). They travel inside the closed
//! [`Record`](enums::record::Record) variant, which carries key derivation and
//! MessagePack encoding so backends never inspect concrete types.
//!
//! # Keys
//!
//! Every record has a natural identity (an info hash, a `(file_id, user_id)` pair or a
//! username). The storage key is the lowercase hex SHA-1 of the table name followed by
//! that identity, e.g. `sha1("announce_log" + info_hash)`.

pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod tests;
