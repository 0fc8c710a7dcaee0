//! The landmark tracker contract.
//!
//! Tracking itself (template matching over images) lives outside this
//! workspace. A session only needs: given the previous rectangle of a
//! landmark, a search window, and the new frame, where is the landmark now?

use std::collections::BTreeMap;

use body_types::{Landmark, Rect};

/// Locates landmarks frame by frame.
pub trait LandmarkTracker {
    /// Whatever the tracker reads a frame from (an image, a detection list).
    type Frame;

    /// Returns the landmark's new rectangle, or `None` if it was lost.
    ///
    /// `previous` is the last known rectangle and `search_window` the region
    /// the match should be looked for in.
    fn track(
        &mut self,
        landmark: Landmark,
        previous: &Rect,
        search_window: &Rect,
        frame: &Self::Frame,
    ) -> Option<Rect>;
}

/// Rectangles recorded for one frame, keyed by landmark.
pub type RecordedFrame = BTreeMap<Landmark, Rect>;

/// Replays rectangles recorded by an earlier tracking pass.
///
/// A landmark absent from a frame is reported as lost. Rectangles are returned
/// as recorded, without regard to the search window.
///
/// # Example
///
/// ```
/// use body_session::{LandmarkTracker, RecordedFrame, RecordedTracker};
/// use body_types::{Landmark, Rect};
///
/// let mut tracker = RecordedTracker;
/// let frame = RecordedFrame::from([(Landmark::Knee, Rect::new(5.0, 5.0, 10.0, 10.0))]);
/// let previous = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let window = previous.inflate(20.0);
///
/// assert!(tracker.track(Landmark::Knee, &previous, &window, &frame).is_some());
/// assert!(tracker.track(Landmark::Hip, &previous, &window, &frame).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedTracker;

impl LandmarkTracker for RecordedTracker {
    type Frame = RecordedFrame;

    fn track(
        &mut self,
        landmark: Landmark,
        _previous: &Rect,
        _search_window: &Rect,
        frame: &Self::Frame,
    ) -> Option<Rect> {
        frame.get(&landmark).copied()
    }
}
