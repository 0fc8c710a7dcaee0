//! Conversion from image pixels to a Cartesian centimeter frame.

use body_types::{Point2, Rect};
use serde::{Deserialize, Serialize};

/// Maps raw image coordinates into the analysis frame.
///
/// Image space has its origin at the top-left and Y pointing down. The
/// analysis frame flips Y about the crop height, so the origin sits at the
/// bottom-left with Y up, and scales pixels to centimeters:
///
/// ```text
/// reframe(p) = (p.x, crop_height - p.y) / pixels_per_cm
/// ```
///
/// # Example
///
/// ```
/// use body_kinematics::FrameTransform;
/// use body_types::Point2;
///
/// let t = FrameTransform::new(480.0, 4.0);
/// assert_eq!(t.reframe(&Point2::new(40.0, 480.0)), Point2::new(10.0, 0.0));
/// assert_eq!(t.reframe(&Point2::new(0.0, 80.0)), Point2::new(0.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTransform {
    /// Height of the crop rectangle in pixels.
    pub crop_height: f64,
    /// Image scale, pixels per centimeter.
    pub pixels_per_cm: f64,
}

impl FrameTransform {
    /// Creates a transform from a crop height and scale.
    #[must_use]
    pub const fn new(crop_height: f64, pixels_per_cm: f64) -> Self {
        Self {
            crop_height,
            pixels_per_cm,
        }
    }

    /// Creates a transform for a crop rectangle.
    #[must_use]
    pub const fn from_crop(crop: &Rect, pixels_per_cm: f64) -> Self {
        Self::new(crop.height, pixels_per_cm)
    }

    /// Pixels to centimeters, Y flipped.
    #[must_use]
    pub fn reframe(&self, p: &Point2) -> Point2 {
        Point2::new(p.x, self.crop_height - p.y) / self.pixels_per_cm
    }

    /// Inverse of [`reframe`](Self::reframe).
    #[must_use]
    pub fn unreframe(&self, p: &Point2) -> Point2 {
        let scaled = p * self.pixels_per_cm;
        Point2::new(scaled.x, self.crop_height - scaled.y)
    }

    /// Checks that the scale is positive and both values are finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.crop_height.is_finite() && self.pixels_per_cm.is_finite() && self.pixels_per_cm > 0.0
    }
}
