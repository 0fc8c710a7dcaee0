//! Kinematic samples and the per-stream finite-difference state.

use std::fmt;

use body_types::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// CSV header written at the top of every stream.
pub const CSV_HEADER: &str = "frame,cm_x,cm_y,cm_dx,cm_dy,cm_vdx,cm_vdy,cm_adx,cm_ady,fg,lever_arm";

/// One output record of a stream.
///
/// Positions are in centimeters in the analysis frame; derived quantities
/// use the stream's frame duration as the time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSample {
    /// Frame index.
    pub frame: u64,
    /// Reframed position (cm).
    pub position: Point2,
    /// Change in position since the previous frame (cm).
    pub displacement: Vector2,
    /// `displacement / frame_duration` (cm/s).
    pub velocity: Vector2,
    /// Change in velocity over one frame (cm/s²).
    pub acceleration: Vector2,
    /// Estimated vertical force `weight * (acceleration.y + gravity)`.
    pub vertical_force: f64,
    /// Horizontal distance from the lever reference to the position (cm).
    pub lever_arm: f64,
}

impl fmt::Display for KinematicSample {
    /// Formats the sample as one CSV row with five fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:.5},{:.5},{:.5},{:.5},{:.5},{:.5},{:.5},{:.5},{:.5},{:.5}",
            self.frame,
            self.position.x,
            self.position.y,
            self.displacement.x,
            self.displacement.y,
            self.velocity.x,
            self.velocity.y,
            self.acceleration.x,
            self.acceleration.y,
            self.vertical_force,
            self.lever_arm,
        )
    }
}

/// Finite differences of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Position change (zero on the first step).
    pub displacement: Vector2,
    /// Velocity over the step.
    pub velocity: Vector2,
    /// Velocity change over the step (zero until two velocities exist).
    pub acceleration: Vector2,
}

/// Hidden state of one stream: the previous position and velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreamState {
    last_position: Option<Point2>,
    last_velocity: Option<Vector2>,
}

impl StreamState {
    /// Creates a fresh state with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_position: None,
            last_velocity: None,
        }
    }

    /// Position recorded by the previous step.
    #[must_use]
    pub const fn last_position(&self) -> Option<Point2> {
        self.last_position
    }

    /// Velocity recorded by the previous step.
    #[must_use]
    pub const fn last_velocity(&self) -> Option<Vector2> {
        self.last_velocity
    }

    /// Advances by one frame to `position`, returning the finite differences.
    ///
    /// The first step of a stream has zero displacement and zero acceleration.
    /// Later accelerations are taken between consecutive velocities, not
    /// consecutive displacements.
    pub fn advance(&mut self, position: Point2, dt: f64) -> Motion {
        let displacement = self
            .last_position
            .map_or_else(Vector2::zeros, |last| position - last);
        let velocity = displacement / dt;
        let acceleration = self
            .last_velocity
            .map_or_else(Vector2::zeros, |last| (velocity - last) / dt);

        self.last_position = Some(position);
        self.last_velocity = Some(velocity);

        Motion {
            displacement,
            velocity,
            acceleration,
        }
    }
}
