//! Anthropometric mass distribution.
//!
//! Segment masses are fixed fractions of total body mass. Bilateral segments
//! have a single-side fraction and a doubled value covering both sides.

use body_types::Segment;
use serde::{Deserialize, Serialize};

/// Head and neck, fraction of total mass.
pub const HEAD_FRACTION: f64 = 0.07;
/// One upper arm, fraction of total mass.
pub const UPPER_ARM_FRACTION: f64 = 0.04;
/// One forearm, fraction of total mass.
pub const FOREARM_FRACTION: f64 = 0.025;
/// One hand, fraction of total mass.
pub const HAND_FRACTION: f64 = 0.005;
/// Trunk, fraction of total mass.
pub const TRUNK_FRACTION: f64 = 0.43;
/// One upper leg, fraction of total mass.
pub const UPPER_LEG_FRACTION: f64 = 0.12;
/// One lower leg, fraction of total mass.
pub const LOWER_LEG_FRACTION: f64 = 0.045;
/// One foot, fraction of total mass.
pub const FOOT_FRACTION: f64 = 0.015;

/// Segment masses of a subject, derived from total body mass.
///
/// Every accessor is a pure function of [`total_mass`](Self::total_mass).
///
/// # Example
///
/// ```
/// use body_cm::AnthropometricModel;
/// use body_types::Segment;
///
/// let model = AnthropometricModel::new(69.0);
/// assert!((model.head() - 4.83).abs() < 1e-9);
/// assert!((model.segment_mass(Segment::Thigh) - 2.0 * model.upper_leg()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricModel {
    total_mass: f64,
}

impl AnthropometricModel {
    /// Creates a model for a subject of `total_mass` kilograms.
    ///
    /// The mass is expected to be positive; it is not validated here.
    #[must_use]
    pub const fn new(total_mass: f64) -> Self {
        Self { total_mass }
    }

    /// Total body mass (kg).
    #[must_use]
    pub const fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Head mass.
    #[must_use]
    pub fn head(&self) -> f64 {
        HEAD_FRACTION * self.total_mass
    }

    /// Mass of one upper arm.
    #[must_use]
    pub fn upper_arm(&self) -> f64 {
        UPPER_ARM_FRACTION * self.total_mass
    }

    /// Mass of both upper arms.
    #[must_use]
    pub fn upper_arms(&self) -> f64 {
        2.0 * self.upper_arm()
    }

    /// Mass of one forearm.
    #[must_use]
    pub fn forearm(&self) -> f64 {
        FOREARM_FRACTION * self.total_mass
    }

    /// Mass of both forearms.
    #[must_use]
    pub fn forearms(&self) -> f64 {
        2.0 * self.forearm()
    }

    /// Mass of one hand.
    #[must_use]
    pub fn hand(&self) -> f64 {
        HAND_FRACTION * self.total_mass
    }

    /// Mass of both hands.
    #[must_use]
    pub fn hands(&self) -> f64 {
        2.0 * self.hand()
    }

    /// Trunk mass.
    #[must_use]
    pub fn trunk(&self) -> f64 {
        TRUNK_FRACTION * self.total_mass
    }

    /// Mass of one upper leg.
    #[must_use]
    pub fn upper_leg(&self) -> f64 {
        UPPER_LEG_FRACTION * self.total_mass
    }

    /// Mass of both upper legs.
    #[must_use]
    pub fn upper_legs(&self) -> f64 {
        2.0 * self.upper_leg()
    }

    /// Mass of one lower leg.
    #[must_use]
    pub fn lower_leg(&self) -> f64 {
        LOWER_LEG_FRACTION * self.total_mass
    }

    /// Mass of both lower legs.
    #[must_use]
    pub fn lower_legs(&self) -> f64 {
        2.0 * self.lower_leg()
    }

    /// Mass of one foot.
    #[must_use]
    pub fn foot(&self) -> f64 {
        FOOT_FRACTION * self.total_mass
    }

    /// Mass of both feet.
    #[must_use]
    pub fn feet(&self) -> f64 {
        2.0 * self.foot()
    }

    /// Mass carried by a segment category.
    ///
    /// Bilateral categories use the doubled value.
    #[must_use]
    pub fn segment_mass(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Head => self.head(),
            Segment::UpperArm => self.upper_arms(),
            Segment::Forearm => self.forearms(),
            Segment::Hand => self.hands(),
            Segment::Trunk => self.trunk(),
            Segment::Thigh => self.upper_legs(),
            Segment::Shank => self.lower_legs(),
            Segment::Foot => self.feet(),
        }
    }
}
