//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Backend selection, trie sizing, buffers and shutdown deadline.
pub mod storage_config;

/// Relational database connection configuration.
pub mod database_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
