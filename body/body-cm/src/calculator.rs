//! Segment center-of-mass engine.

use std::collections::BTreeSet;

use body_types::{BodyError, Landmark, Point2, Rect, Result, Segment, weighted_centroid};
use tracing::debug;

use crate::{AnthropometricModel, FreeBody, FreeBodyAggregate, SegmentRules};

/// Tracks the latest landmark positions and the segment CMs derived from them.
///
/// [`update`](Self::update) is the only mutator: it stores the new landmark
/// positions and immediately recomputes all eight segment CMs, so every query
/// observes a consistent frame.
///
/// # Example
///
/// ```
/// use body_cm::{AnthropometricModel, CmCalculator};
/// use body_types::{Landmark, Point2, Rect};
///
/// let mut calc = CmCalculator::new(AnthropometricModel::new(69.0));
/// let points = [
///     (Landmark::Shoulder, Point2::new(100.0, 100.0)),
///     (Landmark::Elbow, Point2::new(120.0, 140.0)),
///     (Landmark::Wrist, Point2::new(130.0, 180.0)),
///     (Landmark::Hip, Point2::new(100.0, 200.0)),
///     (Landmark::Knee, Point2::new(100.0, 300.0)),
///     (Landmark::Ankle, Point2::new(100.0, 400.0)),
///     (Landmark::Foot, Point2::new(110.0, 410.0)),
/// ];
/// calc.update_landmarks(points.iter().map(|&(l, p)| (l, Rect::centered_at(&p, 10.0, 10.0))))
///     .unwrap();
///
/// let gcm = calc.gcm().unwrap();
/// assert!((gcm.total_weight - 69.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CmCalculator {
    model: AnthropometricModel,
    rules: SegmentRules,
    landmarks: [Option<Point2>; Landmark::COUNT],
    segments: Option<[Point2; Segment::COUNT]>,
}

impl CmCalculator {
    /// Creates a calculator using the standard segment rules.
    ///
    /// The model's total mass must be positive for aggregation to succeed.
    #[must_use]
    pub fn new(model: AnthropometricModel) -> Self {
        Self::with_rules(model, SegmentRules::standard())
    }

    /// Creates a calculator with a custom rule table.
    #[must_use]
    pub fn with_rules(model: AnthropometricModel, rules: SegmentRules) -> Self {
        Self {
            model,
            rules,
            landmarks: [None; Landmark::COUNT],
            segments: None,
        }
    }

    /// The mass model in use.
    #[must_use]
    pub const fn model(&self) -> &AnthropometricModel {
        &self.model
    }

    /// The segment rule table in use.
    #[must_use]
    pub const fn rules(&self) -> &SegmentRules {
        &self.rules
    }

    /// Sets `landmark[names[i]] = center(rects[i])` and recomputes segment CMs.
    ///
    /// # Errors
    ///
    /// - [`BodyError::LengthMismatch`] if the slices differ in length
    /// - [`BodyError::UnknownLandmark`] if a name is not a landmark; nothing is
    ///   stored in that case
    /// - [`BodyError::MissingLandmark`] if, after storing, some landmark has
    ///   still never been set
    pub fn update<S: AsRef<str>>(&mut self, names: &[S], rects: &[Rect]) -> Result<()> {
        if names.len() != rects.len() {
            return Err(BodyError::LengthMismatch {
                names: names.len(),
                rects: rects.len(),
            });
        }

        let parsed = names
            .iter()
            .map(|name| name.as_ref().parse::<Landmark>())
            .collect::<Result<Vec<_>>>()?;

        self.update_landmarks(parsed.into_iter().zip(rects.iter().copied()))
    }

    /// Typed form of [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] if some landmark has still never
    /// been set after storing the given ones.
    pub fn update_landmarks<I>(&mut self, landmarks: I) -> Result<()>
    where
        I: IntoIterator<Item = (Landmark, Rect)>,
    {
        for (landmark, rect) in landmarks {
            self.landmarks[landmark.index()] = Some(rect.center());
        }
        self.recompute()
    }

    fn recompute(&mut self) -> Result<()> {
        let mut located = [Point2::origin(); Landmark::COUNT];
        for landmark in Landmark::ALL {
            located[landmark.index()] = self.landmarks[landmark.index()]
                .ok_or(BodyError::MissingLandmark { landmark })?;
        }

        let mut segments = [Point2::origin(); Segment::COUNT];
        for (segment, rule) in self.rules.iter() {
            segments[segment.index()] = rule.apply(&located);
        }

        debug!(
            head_x = segments[Segment::Head.index()].x,
            trunk_y = segments[Segment::Trunk.index()].y,
            "Recomputed segment centers of mass"
        );
        self.segments = Some(segments);
        Ok(())
    }

    fn first_missing(&self) -> Option<Landmark> {
        Landmark::ALL
            .into_iter()
            .find(|l| self.landmarks[l.index()].is_none())
    }

    fn cached(&self) -> Result<&[Point2; Segment::COUNT]> {
        // Segments are cached exactly when every landmark has been set.
        self.segments.as_ref().ok_or_else(|| BodyError::MissingLandmark {
            landmark: self.first_missing().unwrap_or(Landmark::ALL[0]),
        })
    }

    /// Latest raw position of a landmark, by name.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::UnknownLandmark`] if the name is not a landmark or
    /// the landmark has never been set.
    pub fn get_location(&self, name: &str) -> Result<Point2> {
        let landmark = name.parse::<Landmark>()?;
        self.location(landmark)
    }

    /// Latest raw position of a landmark.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::UnknownLandmark`] if it has never been set.
    pub fn location(&self, landmark: Landmark) -> Result<Point2> {
        self.landmarks[landmark.index()]
            .ok_or_else(|| BodyError::unknown_landmark(landmark.name()))
    }

    /// Cached CM of one segment.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn segment_cm(&self, segment: Segment) -> Result<Point2> {
        Ok(self.cached()?[segment.index()])
    }

    /// All cached segment CMs, in segment order.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn segments(&self) -> Result<Vec<(Segment, Point2)>> {
        let cached = self.cached()?;
        Ok(Segment::ALL.into_iter().map(|s| (s, cached[s.index()])).collect())
    }

    /// Mass-weighted centroid and summed mass of a set of segments.
    ///
    /// Duplicates are ignored and the result does not depend on input order.
    ///
    /// # Errors
    ///
    /// - [`BodyError::EmptySubset`] if no segment is given
    /// - [`BodyError::MissingLandmark`] before the first complete update
    /// - [`BodyError::ZeroMass`] if the segments weigh nothing, which only
    ///   happens with a non-positive total body mass
    pub fn free_body<I>(&self, parts: I) -> Result<FreeBodyAggregate>
    where
        I: IntoIterator<Item = Segment>,
    {
        let parts: BTreeSet<Segment> = parts.into_iter().collect();
        if parts.is_empty() {
            return Err(BodyError::EmptySubset);
        }

        let cached = self.cached()?;
        let (point, total_weight) = weighted_centroid(
            parts
                .iter()
                .map(|&s| (cached[s.index()], self.model.segment_mass(s))),
        )
        .ok_or(BodyError::ZeroMass {
            parts: parts.len(),
        })?;

        Ok(FreeBodyAggregate {
            point,
            total_weight,
        })
    }

    /// [`free_body`](Self::free_body) over segment names.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::UnknownPart`] for a name that is not a segment, in
    /// addition to the errors of [`free_body`](Self::free_body).
    pub fn free_body_by_name<S: AsRef<str>>(&self, names: &[S]) -> Result<FreeBodyAggregate> {
        let parts = names
            .iter()
            .map(|name| name.as_ref().parse::<Segment>())
            .collect::<Result<Vec<_>>>()?;
        self.free_body(parts)
    }

    /// Aggregate over a predefined free body.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn aggregate(&self, body: FreeBody) -> Result<FreeBodyAggregate> {
        self.free_body(body.parts().iter().copied())
    }

    /// Global center of mass (all eight segments).
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn gcm(&self) -> Result<FreeBodyAggregate> {
        self.aggregate(FreeBody::Global)
    }

    /// Center of mass of the free body above the ankle.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn ankle_pcm(&self) -> Result<FreeBodyAggregate> {
        self.aggregate(FreeBody::AboveAnkle)
    }

    /// Center of mass of the free body above the knee.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn knee_pcm(&self) -> Result<FreeBodyAggregate> {
        self.aggregate(FreeBody::AboveKnee)
    }

    /// Center of mass of the free body above the hip.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MissingLandmark`] before the first complete update.
    pub fn hip_pcm(&self) -> Result<FreeBodyAggregate> {
        self.aggregate(FreeBody::AboveHip)
    }
}
