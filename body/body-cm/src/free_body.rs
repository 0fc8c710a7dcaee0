//! Free bodies: sub-chains of segments above a joint.

use std::fmt;
use std::str::FromStr;

use body_types::{BodyError, Point2, Segment};
use serde::{Deserialize, Serialize};

/// Mass-weighted centroid of a set of segment CMs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeBodyAggregate {
    /// Weighted centroid, in the same pixel frame as the landmarks.
    pub point: Point2,
    /// Summed segment mass (kg).
    pub total_weight: f64,
}

/// Predefined free bodies used for link-segment analysis.
///
/// # Example
///
/// ```
/// use body_cm::FreeBody;
/// use body_types::Segment;
///
/// assert_eq!(FreeBody::Global.parts().len(), 8);
/// assert!(!FreeBody::AboveKnee.parts().contains(&Segment::Shank));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreeBody {
    /// Whole body (global center of mass).
    Global,
    /// Everything above the ankle.
    AboveAnkle,
    /// Everything above the knee.
    AboveKnee,
    /// Everything above the hip.
    AboveHip,
}

impl FreeBody {
    /// All predefined free bodies.
    pub const ALL: [Self; 4] = [Self::Global, Self::AboveAnkle, Self::AboveKnee, Self::AboveHip];

    /// Segments belonging to this free body.
    #[must_use]
    pub const fn parts(self) -> &'static [Segment] {
        const ABOVE_HIP: [Segment; 5] = [
            Segment::Head,
            Segment::UpperArm,
            Segment::Forearm,
            Segment::Hand,
            Segment::Trunk,
        ];
        const ABOVE_KNEE: [Segment; 6] = [
            Segment::Head,
            Segment::UpperArm,
            Segment::Forearm,
            Segment::Hand,
            Segment::Trunk,
            Segment::Thigh,
        ];
        const ABOVE_ANKLE: [Segment; 7] = [
            Segment::Head,
            Segment::UpperArm,
            Segment::Forearm,
            Segment::Hand,
            Segment::Trunk,
            Segment::Thigh,
            Segment::Shank,
        ];

        match self {
            Self::Global => &Segment::ALL,
            Self::AboveAnkle => &ABOVE_ANKLE,
            Self::AboveKnee => &ABOVE_KNEE,
            Self::AboveHip => &ABOVE_HIP,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::AboveAnkle => "AboveAnkle",
            Self::AboveKnee => "AboveKnee",
            Self::AboveHip => "AboveHip",
        }
    }
}

impl fmt::Display for FreeBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FreeBody {
    type Err = BodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BodyError::unknown_part(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_are_nested() {
        let hip = FreeBody::AboveHip.parts();
        let knee = FreeBody::AboveKnee.parts();
        let ankle = FreeBody::AboveAnkle.parts();
        let global = FreeBody::Global.parts();

        assert!(hip.iter().all(|s| knee.contains(s)));
        assert!(knee.iter().all(|s| ankle.contains(s)));
        assert!(ankle.iter().all(|s| global.contains(s)));
        assert_eq!(
            (hip.len(), knee.len(), ankle.len(), global.len()),
            (5, 6, 7, 8)
        );
    }

    #[test]
    fn free_body_parse() {
        assert_eq!("aboveknee".parse::<FreeBody>(), Ok(FreeBody::AboveKnee));
        assert!("AboveNeck".parse::<FreeBody>().is_err());
    }
}
