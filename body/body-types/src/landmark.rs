//! Tracked anatomical landmarks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BodyError;

/// One of the seven anatomical landmarks tracked on the subject.
///
/// The set is fixed: every segment CM rule is expressed in terms of these
/// landmarks, and all seven must be known before any CM can be computed.
///
/// # Example
///
/// ```
/// use body_types::Landmark;
///
/// let knee: Landmark = "Knee".parse().unwrap();
/// assert_eq!(knee, Landmark::Knee);
/// assert_eq!(knee.to_string(), "Knee");
/// assert_eq!(Landmark::ALL.len(), Landmark::COUNT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Landmark {
    /// Wrist joint.
    Wrist,
    /// Elbow joint.
    Elbow,
    /// Shoulder joint.
    Shoulder,
    /// Hip joint.
    Hip,
    /// Knee joint.
    Knee,
    /// Ankle joint.
    Ankle,
    /// Toe end of the foot.
    Foot,
}

impl Landmark {
    /// Number of landmarks.
    pub const COUNT: usize = 7;

    /// All landmarks, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Wrist,
        Self::Elbow,
        Self::Shoulder,
        Self::Hip,
        Self::Knee,
        Self::Ankle,
        Self::Foot,
    ];

    /// Dense index in `0..COUNT`, usable for array-backed maps.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wrist => "Wrist",
            Self::Elbow => "Elbow",
            Self::Shoulder => "Shoulder",
            Self::Hip => "Hip",
            Self::Knee => "Knee",
            Self::Ankle => "Ankle",
            Self::Foot => "Foot",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Landmark {
    type Err = BodyError;

    /// Parses a landmark name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|landmark| landmark.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BodyError::unknown_landmark(s))
    }
}
