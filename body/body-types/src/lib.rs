//! Core types for body center-of-mass estimation.
//!
//! This crate provides the leaf types shared by the rest of the `body-*`
//! crates:
//!
//! - [`Point2`] / [`Vector2`] - 2-D point arithmetic backed by `nalgebra`
//! - [`Rect`] - Pixel rectangle reported by a landmark tracker
//! - [`Landmark`] - The seven tracked anatomical landmarks
//! - [`Segment`] - The eight body segments whose center of mass is estimated
//! - [`BodyError`] - Errors raised by name lookups and landmark bookkeeping
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate: it depends on no other `body-*` crate and holds no
//! state. It can be used in CLI tools, analysis scripts, and servers alike.
//!
//! # Coordinate Conventions
//!
//! Landmark positions and rectangles are in raw image pixels with the origin at
//! the top-left corner and Y pointing down. Conversion into a Cartesian frame in
//! centimeters happens later, in `body-kinematics`.
//!
//! # Example
//!
//! ```
//! use body_types::{walk, Landmark, Point2, Rect};
//!
//! let shoulder = Rect::new(90.0, 90.0, 20.0, 20.0).center();
//! let elbow = Point2::new(120.0, 140.0);
//!
//! let upper_arm = walk(&shoulder, &elbow, 0.5);
//! assert!((upper_arm.x - 110.0).abs() < 1e-9);
//! assert_eq!("shoulder".parse::<Landmark>().ok(), Some(Landmark::Shoulder));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod landmark;
mod rect;
mod segment;
mod vector;

pub use error::{BodyError, Result};
pub use landmark::Landmark;
pub use rect::Rect;
pub use segment::Segment;
pub use vector::{Point2, Vector2, walk, weighted_centroid};
