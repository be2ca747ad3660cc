//! # Torrust-Storage
//!
//! The request-routing and dual-backend storage engine of a BitTorrent tracker.
//!
//! ## Overview
//!
//! Producers submit reads and writes over two inbound streams. A dispatcher decides per
//! request which backend must see it: the in-memory sharded map store, the relational
//! persistent store, or both. Each backend runs in its own task and is shut down once,
//! the map store first, when the process receives its shutdown signal.
//!
//! ## Features
//!
//! - **Routing Modes**: map and persistent store can be enabled independently
//! - **Sharded Map Store**: hexadecimal trie sized from the configured capacity
//! - **Database Agnostic**: SQLite, MySQL and PostgreSQL through sqlx
//! - **Compact Peer Lists**: 6 bytes per IPv4 peer as returned by the tracker
//! - **Graceful Shutdown**: in-flight work drains within a configurable deadline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrust_storage::config::structs::configuration::Configuration;
//! use torrust_storage::storage::structs::storage_channels::StorageChannels;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let (handle, inbound) = StorageChannels::new(config.storage.request_buffer);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, time and hash helpers, error type
//! - [`compact`] - Compact peer list encoding and decoding
//! - [`config`] - Configuration management and TOML parsing
//! - [`dispatcher`] - Request routing and shutdown coordination
//! - [`map_db`] - In-memory sharded map store
//! - [`records`] - Stored entities, keys and MessagePack encoding
//! - [`sql_db`] - Relational persistent store (SQLite, MySQL, PostgreSQL)
//! - [`storage`] - Requests, responses, channels and the backend contract
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup, the application clock, SHA-1 key hashing and the
/// process-level error type.
pub mod common;

/// Compact peer list encoder.
///
/// Turns matched `(ip, port)` peer rows into the 6 bytes per peer layout used by
/// tracker announce responses.
pub mod compact;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Request router.
///
/// Consumes the inbound streams and forwards every request to the backend(s) its
/// routing mode requires.
pub mod dispatcher;

/// Sharded in-memory map store.
pub mod map_db;

/// Record types stored by both backends.
pub mod records;

/// Persistent store module with multi-database support.
///
/// Provides one adapter for SQLite, MySQL, and PostgreSQL with the dialect
/// differences kept in query helpers.
pub mod sql_db;

/// Storage requests, responses and the backend trait.
pub mod storage;

/// CLI argument parsing.
pub mod structs;
