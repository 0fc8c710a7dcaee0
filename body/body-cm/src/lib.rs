//! Segment and free-body center-of-mass estimation.
//!
//! Given the latest tracked landmark positions of a subject, this crate
//! locates the center of mass (CM) of each of the eight body segments and
//! combines any subset of them into a mass-weighted free-body CM.
//!
//! - [`AnthropometricModel`] - Segment masses as fixed fractions of body mass
//! - [`CmRule`] / [`SegmentRules`] - How each segment CM is located
//! - [`CmCalculator`] - Holds landmarks, caches segment CMs, aggregates
//! - [`FreeBody`] - Predefined subsets (global, above ankle/knee/hip)
//!
//! # Example
//!
//! ```
//! use body_cm::{AnthropometricModel, CmCalculator, FreeBody};
//! use body_types::Rect;
//!
//! let mut calc = CmCalculator::new(AnthropometricModel::new(69.0));
//! let names = ["Wrist", "Elbow", "Shoulder", "Hip", "Knee", "Ankle", "Foot"];
//! let rects = [
//!     Rect::new(125.0, 175.0, 10.0, 10.0),
//!     Rect::new(115.0, 135.0, 10.0, 10.0),
//!     Rect::new(95.0, 95.0, 10.0, 10.0),
//!     Rect::new(95.0, 195.0, 10.0, 10.0),
//!     Rect::new(95.0, 295.0, 10.0, 10.0),
//!     Rect::new(95.0, 395.0, 10.0, 10.0),
//!     Rect::new(105.0, 405.0, 10.0, 10.0),
//! ];
//! calc.update(&names, &rects).unwrap();
//!
//! let hip = calc.aggregate(FreeBody::AboveHip).unwrap();
//! assert!(hip.total_weight < calc.gcm().unwrap().total_weight);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod anthro;
mod calculator;
mod free_body;
mod rules;

pub use anthro::{
    AnthropometricModel, FOOT_FRACTION, FOREARM_FRACTION, HAND_FRACTION, HEAD_FRACTION,
    LOWER_LEG_FRACTION, TRUNK_FRACTION, UPPER_ARM_FRACTION, UPPER_LEG_FRACTION,
};
pub use calculator::CmCalculator;
pub use free_body::{FreeBody, FreeBodyAggregate};
pub use rules::{CmRule, SegmentRules};
