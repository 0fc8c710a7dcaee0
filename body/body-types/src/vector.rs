//! Minimal 2-D point arithmetic.
//!
//! Points and vectors are `nalgebra` types, so addition, subtraction, scaling
//! and division come from nalgebra's operator overloads. The helpers here
//! cover the two compound operations the CM estimators need.

/// A 2-D position (pixels or centimeters, depending on the frame).
pub type Point2 = nalgebra::Point2<f64>;

/// A 2-D displacement, velocity, or acceleration.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Walks from `from` towards `to` by `ratio` of the distance between them.
///
/// `ratio = 0` returns `from`, `ratio = 1` returns `to`.
///
/// # Example
///
/// ```
/// use body_types::{walk, Point2};
///
/// let p = walk(&Point2::new(0.0, 0.0), &Point2::new(10.0, 20.0), 0.25);
/// assert_eq!(p, Point2::new(2.5, 5.0));
/// ```
#[must_use]
pub fn walk(from: &Point2, to: &Point2, ratio: f64) -> Point2 {
    from + (to - from) * ratio
}

/// Computes the weighted centroid of `(point, weight)` pairs.
///
/// Returns the centroid and the summed weight, or `None` if the input is
/// empty or the weights sum to zero.
#[must_use]
pub fn weighted_centroid<I>(items: I) -> Option<(Point2, f64)>
where
    I: IntoIterator<Item = (Point2, f64)>,
{
    let mut sum = Vector2::zeros();
    let mut total = 0.0;
    for (point, weight) in items {
        sum += point.coords * weight;
        total += weight;
    }

    if total == 0.0 {
        return None;
    }
    Some((Point2::from(sum / total), total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn walk_endpoints() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(5.0, -2.0);
        assert_eq!(walk(&a, &b, 0.0), a);
        assert_eq!(walk(&a, &b, 1.0), b);
    }

    #[test]
    fn walk_fraction() {
        let p = walk(&Point2::new(100.0, 100.0), &Point2::new(120.0, 140.0), 0.5754);
        assert_relative_eq!(p.x, 111.508, epsilon = 1e-9);
        assert_relative_eq!(p.y, 123.016, epsilon = 1e-9);
    }

    #[test]
    fn centroid_of_equal_weights_is_midpoint() {
        let (c, w) = weighted_centroid([
            (Point2::new(0.0, 0.0), 2.0),
            (Point2::new(4.0, 6.0), 2.0),
        ])
        .unwrap();
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 3.0);
        assert_relative_eq!(w, 4.0);
    }

    #[test]
    fn centroid_pulls_towards_heavier_point() {
        let (c, w) = weighted_centroid([
            (Point2::new(0.0, 0.0), 1.0),
            (Point2::new(10.0, 0.0), 3.0),
        ])
        .unwrap();
        assert_relative_eq!(c.x, 7.5);
        assert_relative_eq!(w, 4.0);
    }

    #[test]
    fn centroid_of_nothing() {
        assert!(weighted_centroid(std::iter::empty::<(Point2, f64)>()).is_none());
        assert!(weighted_centroid([(Point2::new(1.0, 1.0), 0.0)]).is_none());
    }
}
