//! Configuration for kinematic stream writing.

use serde::{Deserialize, Serialize};

use crate::{FrameTransform, Result, WriterError};

/// Frame duration of the study capture, in seconds.
pub const DEFAULT_FRAME_DURATION: f64 = 0.22;

/// Gravitational acceleration added to the measured vertical acceleration.
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Settings shared by every stream of a [`DataWriter`](crate::DataWriter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicsConfig {
    /// Pixel to centimeter frame conversion.
    pub transform: FrameTransform,
    /// Time between consecutive frames (seconds).
    pub frame_duration: f64,
    /// Gravity term of the vertical force estimate.
    ///
    /// The acceleration it is added to is in cm/s², not m/s². Reference
    /// outputs were produced with this mix of units, so it is kept as is.
    pub gravity: f64,
}

impl KinematicsConfig {
    /// Creates a configuration with the default frame duration and gravity.
    #[must_use]
    pub const fn new(transform: FrameTransform) -> Self {
        Self {
            transform,
            frame_duration: DEFAULT_FRAME_DURATION,
            gravity: DEFAULT_GRAVITY,
        }
    }

    /// Set the frame duration.
    #[must_use]
    pub const fn frame_duration(mut self, seconds: f64) -> Self {
        self.frame_duration = seconds;
        self
    }

    /// Set the gravity term.
    #[must_use]
    pub const fn gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::InvalidConfig`] for a non-positive or non-finite
    /// frame duration or pixel scale, or a non-finite gravity term.
    pub fn validate(&self) -> Result<()> {
        if !self.frame_duration.is_finite() || self.frame_duration <= 0.0 {
            return Err(WriterError::invalid_config(format!(
                "frame duration must be positive and finite, got {}",
                self.frame_duration
            )));
        }
        if !self.transform.is_valid() {
            return Err(WriterError::invalid_config(format!(
                "pixels per cm must be positive and finite, got {}",
                self.transform.pixels_per_cm
            )));
        }
        if !self.gravity.is_finite() {
            return Err(WriterError::invalid_config("gravity must be finite"));
        }
        Ok(())
    }
}
