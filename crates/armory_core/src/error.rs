//! Error types for the production plan.
//!
//! Day-to-day operations on a [`MaterialProduction`](crate::production::MaterialProduction)
//! never fail. Errors only come from the edges: snapshots, config parsing and
//! file access in the tooling.

use thiserror::Error;

/// Result type alias using [`ProductionError`].
pub type Result<T> = std::result::Result<T, ProductionError>;

/// Top-level error type for the production plan.
#[derive(Debug, Error)]
pub enum ProductionError {
    /// Failed to encode a snapshot.
    #[error("Failed to serialize production state: {0}")]
    Serialization(String),

    /// Failed to decode a snapshot.
    #[error("Failed to deserialize production state: {0}")]
    Deserialization(String),

    /// Snapshot was written by an incompatible format version.
    #[error("Snapshot version mismatch: expected {expected}, found {found}")]
    SnapshotVersionMismatch {
        /// Version this build understands.
        expected: u32,
        /// Version stored in the payload.
        found: u32,
    },

    /// Config text could not be parsed.
    #[error("Failed to parse production config '{source_name}': {message}")]
    ConfigParse {
        /// File name or other label for the parsed text.
        source_name: String,
        /// Parser error message.
        message: String,
    },

    /// Config parsed but failed validation.
    #[error("Invalid production config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying error message.
        message: String,
    },
}
