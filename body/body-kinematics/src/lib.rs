//! Center-of-mass kinematics streams.
//!
//! For each named output stream (for example `global`, `ankle`, `knee`,
//! `hip`) this crate turns a sequence of raw pixel positions into kinematic
//! records: reframed position, displacement, velocity, acceleration, an
//! estimated vertical force, and a lever arm. Records are written as CSV,
//! one destination per stream.
//!
//! - [`FrameTransform`] - Pixel to centimeter conversion with Y flip
//! - [`KinematicsConfig`] - Frame transform, frame duration, gravity term
//! - [`StreamState`] - Previous position and velocity of one stream
//! - [`KinematicSample`] - One output record
//! - [`DataWriter`] - Per-stream state and CSV output
//!
//! # Output Format
//!
//! ```text
//! frame,cm_x,cm_y,cm_dx,cm_dy,cm_vdx,cm_vdy,cm_adx,cm_ady,fg,lever_arm
//! 1,25.00000,50.00000,0.00000,0.00000,0.00000,0.00000,0.00000,0.00000,676.89000,3.25000
//! ```
//!
//! Numbers always have five fractional digits and use `.` as the decimal
//! separator.
//!
//! # Units
//!
//! The force column is `weight * (ady + gravity)` with `ady` in cm/s² and the
//! default gravity of 9.81. The units do not match; the formula reproduces the
//! reference analysis output and is intentionally left as is.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod config;
mod error;
mod sample;
mod transform;
mod writer;

pub use config::{DEFAULT_FRAME_DURATION, DEFAULT_GRAVITY, KinematicsConfig};
pub use error::{Result, WriterError};
pub use sample::{CSV_HEADER, KinematicSample, Motion, StreamState};
pub use transform::FrameTransform;
pub use writer::DataWriter;
