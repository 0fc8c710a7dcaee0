//! Pixel rectangles reported by the landmark tracker.

use serde::{Deserialize, Serialize};

use crate::Point2;

/// An axis-aligned rectangle in image pixels.
///
/// The origin is the top-left corner of the image and Y points down, matching
/// how trackers report template matches.
///
/// # Example
///
/// ```
/// use body_types::{Point2, Rect};
///
/// let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
/// assert_eq!(rect.center(), Point2::new(25.0, 40.0));
/// assert_eq!(rect.inflate(5.0), Rect::new(5.0, 15.0, 40.0, 50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size centered on `center`.
    #[must_use]
    pub fn centered_at(center: &Point2, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the rectangle grown by `margin` pixels on every side.
    ///
    /// A negative margin shrinks the rectangle; the size never goes below zero.
    #[must_use]
    pub fn inflate(&self, margin: f64) -> Self {
        let width = (self.width + 2.0 * margin).max(0.0);
        let height = (self.height + 2.0 * margin).max(0.0);
        Self::centered_at(&self.center(), width, height)
    }

    /// Checks that all coordinates are finite and the size is non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}
