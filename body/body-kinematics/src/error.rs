//! Error types for kinematic stream writing.

use thiserror::Error;

/// Result type for kinematic stream operations.
pub type Result<T> = std::result::Result<T, WriterError>;

/// Errors that can occur while writing kinematic streams.
#[derive(Debug, Error)]
pub enum WriterError {
    /// A frame was written to a stream that was never configured.
    #[error("unknown stream: {name}")]
    UnknownStream {
        /// The offending stream name.
        name: String,
    },

    /// The same stream name was configured twice.
    #[error("duplicate stream: {name}")]
    DuplicateStream {
        /// The repeated stream name.
        name: String,
    },

    /// Invalid writer configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// Output destination could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WriterError {
    /// Creates an unknown stream error.
    #[must_use]
    pub fn unknown_stream(name: impl Into<String>) -> Self {
        Self::UnknownStream { name: name.into() }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
