//! Body segments whose center of mass is estimated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BodyError;

/// One of the eight body-segment CM categories.
///
/// Bilateral segments (arms, legs, hands, feet) are treated as a single
/// category whose mass covers both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    /// Head and neck.
    Head,
    /// Upper arm (shoulder to elbow).
    UpperArm,
    /// Forearm (elbow to wrist).
    Forearm,
    /// Hand.
    Hand,
    /// Trunk (shoulder to hip).
    Trunk,
    /// Thigh (hip to knee).
    Thigh,
    /// Shank (knee to ankle).
    Shank,
    /// Foot.
    Foot,
}

impl Segment {
    /// Number of segments.
    pub const COUNT: usize = 8;

    /// All segments, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Head,
        Self::UpperArm,
        Self::Forearm,
        Self::Hand,
        Self::Trunk,
        Self::Thigh,
        Self::Shank,
        Self::Foot,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::UpperArm => "UpperArm",
            Self::Forearm => "Forearm",
            Self::Hand => "Hand",
            Self::Trunk => "Trunk",
            Self::Thigh => "Thigh",
            Self::Shank => "Shank",
            Self::Foot => "Foot",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Segment {
    type Err = BodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|segment| segment.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BodyError::unknown_part(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_indices_are_dense() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
        }
    }

    #[test]
    fn segment_parse() {
        assert_eq!("upperarm".parse::<Segment>(), Ok(Segment::UpperArm));
        assert_eq!("Shank".parse::<Segment>(), Ok(Segment::Shank));
        assert_eq!(
            "Tail".parse::<Segment>(),
            Err(BodyError::unknown_part("Tail"))
        );
    }

    #[test]
    fn segment_serde_uses_names() {
        let json = serde_json::to_string(&Segment::Thigh).unwrap();
        assert_eq!(json, "\"Thigh\"");
    }
}
