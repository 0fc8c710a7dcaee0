//! Error types for study sessions.

use body_kinematics::WriterError;
use body_types::BodyError;
use thiserror::Error;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while configuring or running a session.
///
/// Any error aborts the run: a bad frame breaks the finite-difference chain
/// of every stream.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Landmark or segment bookkeeping failed.
    #[error(transparent)]
    Body(#[from] BodyError),

    /// Writing a kinematic stream failed.
    #[error(transparent)]
    Writer(#[from] WriterError),

    /// Invalid study configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// Configuration file is not valid JSON for a study.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_transparent() {
        let err: SessionError = BodyError::EmptySubset.into();
        assert_eq!(format!("{err}"), format!("{}", BodyError::EmptySubset));

        let err: SessionError = WriterError::unknown_stream("neck").into();
        assert!(format!("{err}").contains("neck"));
    }

    #[test]
    fn error_invalid_config() {
        let msg = format!("{}", SessionError::invalid_config("no streams"));
        assert!(msg.contains("no streams"));
    }
}
