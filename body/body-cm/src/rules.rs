//! Per-segment center-of-mass interpolation rules.
//!
//! Each segment CM is located either by a fixed pixel offset from one
//! landmark, or by walking a fixed fraction of the way from one landmark to
//! another. The offsets for [`Segment::Head`] and [`Segment::Foot`] are tuned
//! to a particular camera framing and are meant to be overridden per study.

use body_types::{Landmark, Point2, Segment, Vector2, walk};
use serde::{Deserialize, Serialize};

/// Rule that locates one segment CM from the landmark positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CmRule {
    /// `from + offset`, with the offset in image pixels.
    Offset {
        /// Anchor landmark.
        from: Landmark,
        /// Pixel offset added to the anchor.
        offset: Vector2,
    },
    /// `from + ratio * (to - from)`.
    Walk {
        /// Proximal landmark.
        from: Landmark,
        /// Distal landmark.
        to: Landmark,
        /// Fraction of the segment length measured from `from`.
        ratio: f64,
    },
}

impl CmRule {
    /// Creates an offset rule.
    #[must_use]
    pub fn offset(from: Landmark, dx: f64, dy: f64) -> Self {
        Self::Offset {
            from,
            offset: Vector2::new(dx, dy),
        }
    }

    /// Creates a fractional walk rule.
    #[must_use]
    pub const fn walk(from: Landmark, to: Landmark, ratio: f64) -> Self {
        Self::Walk { from, to, ratio }
    }

    /// Locates the segment CM given every landmark position, indexed by
    /// [`Landmark::index`].
    #[must_use]
    pub fn apply(&self, landmarks: &[Point2; Landmark::COUNT]) -> Point2 {
        match *self {
            Self::Offset { from, offset } => landmarks[from.index()] + offset,
            Self::Walk { from, to, ratio } => {
                walk(&landmarks[from.index()], &landmarks[to.index()], ratio)
            }
        }
    }
}

/// The table of rules, one per segment.
///
/// # Example
///
/// ```
/// use body_cm::{CmRule, SegmentRules};
/// use body_types::{Landmark, Segment};
///
/// let rules = SegmentRules::standard()
///     .with_rule(Segment::Head, CmRule::offset(Landmark::Shoulder, -10.0, -30.0));
/// assert_eq!(rules.rule(Segment::Head), CmRule::offset(Landmark::Shoulder, -10.0, -30.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRules {
    rules: [CmRule; Segment::COUNT],
}

impl SegmentRules {
    /// The standard rule set for the study camera framing.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: Segment::ALL.map(Self::standard_rule),
        }
    }

    fn standard_rule(segment: Segment) -> CmRule {
        match segment {
            Segment::Head => CmRule::offset(Landmark::Shoulder, -12.0, -23.576),
            Segment::UpperArm => CmRule::walk(Landmark::Shoulder, Landmark::Elbow, 0.5754),
            Segment::Forearm => CmRule::walk(Landmark::Elbow, Landmark::Wrist, 0.4559),
            Segment::Hand => CmRule::offset(Landmark::Wrist, 26.159, 0.0),
            Segment::Trunk => CmRule::walk(Landmark::Shoulder, Landmark::Hip, 0.4151),
            Segment::Thigh => CmRule::walk(Landmark::Hip, Landmark::Knee, 0.3612),
            Segment::Shank => CmRule::walk(Landmark::Knee, Landmark::Ankle, 0.4416),
            Segment::Foot => CmRule::offset(Landmark::Foot, -19.93, 0.0),
        }
    }

    /// Replaces the rule for one segment.
    #[must_use]
    pub fn with_rule(mut self, segment: Segment, rule: CmRule) -> Self {
        self.rules[segment.index()] = rule;
        self
    }

    /// The rule for a segment.
    #[must_use]
    pub fn rule(&self, segment: Segment) -> CmRule {
        self.rules[segment.index()]
    }

    /// Iterates `(segment, rule)` pairs in segment order.
    pub fn iter(&self) -> impl Iterator<Item = (Segment, CmRule)> + '_ {
        Segment::ALL.into_iter().map(|s| (s, self.rule(s)))
    }
}

impl Default for SegmentRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario() -> [Point2; Landmark::COUNT] {
        Landmark::ALL.map(|landmark| match landmark {
            Landmark::Shoulder => Point2::new(100.0, 100.0),
            Landmark::Elbow => Point2::new(120.0, 140.0),
            Landmark::Wrist => Point2::new(130.0, 180.0),
            Landmark::Hip => Point2::new(100.0, 200.0),
            Landmark::Knee => Point2::new(100.0, 300.0),
            Landmark::Ankle => Point2::new(100.0, 400.0),
            Landmark::Foot => Point2::new(110.0, 410.0),
        })
    }

    fn apply(segment: Segment) -> Point2 {
        SegmentRules::standard().rule(segment).apply(&scenario())
    }

    #[test]
    fn head_is_fixed_offset_from_shoulder() {
        let head = apply(Segment::Head);
        assert_relative_eq!(head.x, 88.0, epsilon = 1e-9);
        assert_relative_eq!(head.y, 76.424, epsilon = 1e-9);
    }

    #[test]
    fn upper_arm_walks_shoulder_to_elbow() {
        let p = apply(Segment::UpperArm);
        assert_relative_eq!(p.x, 111.508, epsilon = 1e-9);
        assert_relative_eq!(p.y, 123.016, epsilon = 1e-9);
    }

    #[test]
    fn forearm_walks_elbow_to_wrist() {
        let p = apply(Segment::Forearm);
        assert_relative_eq!(p.x, 124.559, epsilon = 1e-9);
        assert_relative_eq!(p.y, 158.236, epsilon = 1e-9);
    }

    #[test]
    fn hand_is_offset_from_wrist() {
        let p = apply(Segment::Hand);
        assert_relative_eq!(p.x, 156.159, epsilon = 1e-9);
        assert_relative_eq!(p.y, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn trunk_walks_shoulder_to_hip() {
        let p = apply(Segment::Trunk);
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 141.51, epsilon = 1e-9);
    }

    #[test]
    fn thigh_walks_hip_to_knee() {
        let p = apply(Segment::Thigh);
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 236.12, epsilon = 1e-9);
    }

    #[test]
    fn shank_walks_knee_to_ankle() {
        let p = apply(Segment::Shank);
        assert_relative_eq!(p.y, 344.16, epsilon = 1e-9);
    }

    #[test]
    fn foot_is_offset_from_foot_landmark() {
        let p = apply(Segment::Foot);
        assert_relative_eq!(p.x, 90.07, epsilon = 1e-9);
        assert_relative_eq!(p.y, 410.0, epsilon = 1e-9);
    }

    #[test]
    fn walk_ratio_endpoints() {
        let landmarks = scenario();
        let at_hip = CmRule::walk(Landmark::Hip, Landmark::Knee, 0.0).apply(&landmarks);
        let at_knee = CmRule::walk(Landmark::Hip, Landmark::Knee, 1.0).apply(&landmarks);
        assert_eq!(at_hip, landmarks[Landmark::Hip.index()]);
        assert_eq!(at_knee, landmarks[Landmark::Knee.index()]);
    }

    #[test]
    fn rule_override() {
        let custom = CmRule::offset(Landmark::Foot, -25.0, 2.0);
        let rules = SegmentRules::standard().with_rule(Segment::Foot, custom);
        assert_eq!(rules.rule(Segment::Foot), custom);
        assert_eq!(
            rules.rule(Segment::Head),
            SegmentRules::standard().rule(Segment::Head)
        );
        assert_eq!(rules.iter().count(), Segment::COUNT);
    }

    #[test]
    fn rule_serde() {
        let json = r#"{"kind":"walk","from":"Hip","to":"Knee","ratio":0.5}"#;
        let rule: CmRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule, CmRule::walk(Landmark::Hip, Landmark::Knee, 0.5));
    }
}
