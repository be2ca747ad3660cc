//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the storage engine.
//!
//! # Utilities
//!
//! - Logging setup (`fern` + `log`)
//! - Timestamp utilities
//! - SHA-1 hex digests used for record keys
//!
//! # Data Structures
//!
//! - `CustomError` - Process level error with a plain message
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_storage::common::common::{current_time, sha1_hex};
//!
//! let now = current_time();
//! let key = sha1_hex("announce_log", "0123456789abcdef0123456789abcdef01234567");
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
