//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the storage engine
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **storage**: backend selection (`map_enabled`, `sql_enabled`), trie capacity,
//!   channel buffers and the shutdown deadline
//! - **database**: relational engine and connection path
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_storage::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_file("config.toml")?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
