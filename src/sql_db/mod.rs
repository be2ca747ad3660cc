//! Persistent relational store over sqlx.
//!
//! One [`SqlDb`](structs::sql_db::SqlDb) fronts a SQLite, MySQL or PostgreSQL pool.
//! The pool is created lazily, so an unreachable database never stops the process;
//! every operation acquires its own connection (and, for writes, a transaction with
//! exactly one statement) and releases it before returning. Failures are logged with
//! the engine prefix and surface as `false`, `None`, `0` or an empty buffer.
//!
//! Dialect differences live in [`helpers`].

#[macro_use]
mod macros;

#[allow(clippy::module_inception)]
pub mod sql_db;
pub mod enums;
pub mod helpers;
pub mod impls;
pub mod structs;
