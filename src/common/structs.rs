//! Common data structures.

/// Plain message error used during process bootstrap.
pub mod custom_error;
