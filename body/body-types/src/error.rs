//! Error types for landmark and segment bookkeeping.

use thiserror::Error;

use crate::Landmark;

/// Result type for body operations.
pub type Result<T> = std::result::Result<T, BodyError>;

/// Errors that can occur when updating landmarks or querying segment CMs.
///
/// All of these are caller errors: none of them is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BodyError {
    /// A landmark required for the segment recompute has never been set.
    #[error("missing landmark: {landmark} has not been set by any update")]
    MissingLandmark {
        /// The first required landmark found absent.
        landmark: Landmark,
    },

    /// A landmark name is not recognized, or was never set.
    #[error("unknown landmark: {name}")]
    UnknownLandmark {
        /// The offending name.
        name: String,
    },

    /// A segment name is not one of the eight body segments.
    #[error("unknown body part: {name}")]
    UnknownPart {
        /// The offending name.
        name: String,
    },

    /// A free-body aggregation was requested over zero parts.
    #[error("free-body aggregation requested over an empty subset")]
    EmptySubset,

    /// The requested segments have zero total mass.
    #[error("free body of {parts} segment(s) has zero total mass; total body mass must be positive")]
    ZeroMass {
        /// Number of distinct segments requested.
        parts: usize,
    },

    /// Landmark names and rectangles were supplied with different lengths.
    #[error("length mismatch: {names} landmark names but {rects} rectangles")]
    LengthMismatch {
        /// Number of names supplied.
        names: usize,
        /// Number of rectangles supplied.
        rects: usize,
    },
}

impl BodyError {
    /// Creates an unknown landmark error.
    #[must_use]
    pub fn unknown_landmark(name: impl Into<String>) -> Self {
        Self::UnknownLandmark { name: name.into() }
    }

    /// Creates an unknown part error.
    #[must_use]
    pub fn unknown_part(name: impl Into<String>) -> Self {
        Self::UnknownPart { name: name.into() }
    }
}
