//! Unified error types for the shopping-list core.
//!
//! Every public operation either returns the fresh persisted record or one of
//! these errors; nothing is swallowed. `Validation` is raised before any state
//! is mutated, `NotFound` when an operation targets a missing id, and
//! `Database` wraps any backing-store failure unchanged.

use thiserror::Error;

/// All errors the core can surface to its caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before touching the store (empty name, empty selection,
    /// operation already in flight).
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what was rejected
        message: String,
    },

    /// The targeted record does not exist. The core never retries; the caller
    /// decides how to report it.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up (e.g. "category")
        entity: &'static str,
        /// The id that failed to resolve
        id: i64,
    },

    /// Configuration error (unreadable or malformed config.toml)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Generic backing-store failure, propagated unchanged
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure while reading configuration files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
