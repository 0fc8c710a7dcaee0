//! Study sessions: from tracked landmarks to kinematic CSV streams.
//!
//! A [`Session`] runs the whole per-frame pipeline:
//!
//! ```text
//! tracker -> landmark rectangles -> CmCalculator::update_landmarks
//!         -> free-body aggregates -> DataWriter::write_frame (per stream)
//! ```
//!
//! - [`StudyConfig`] - Subject, camera, and stream configuration (JSON)
//! - [`LandmarkTracker`] - Contract for the external landmark tracker
//! - [`RecordedTracker`] - Replays rectangles from an earlier tracking pass
//! - [`Session`] - Frame-by-frame driver
//!
//! Frames are processed strictly in order, one at a time. A lost landmark is
//! logged and keeps its last rectangle; any other failure aborts the run.
//!
//! # Example
//!
//! ```no_run
//! use body_session::{RecordedFrame, RecordedTracker, Session, StudyConfig};
//!
//! let config = StudyConfig::load("study.json").unwrap();
//! let frames: Vec<RecordedFrame> = Vec::new();
//!
//! let mut session = Session::create(&config, RecordedTracker, "out").unwrap();
//! session.run(frames).unwrap();
//! session.finish().unwrap();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod config;
mod error;
mod session;
mod tracker;

pub use config::{LandmarkSeed, StreamSpec, StudyConfig};
pub use error::{Result, SessionError};
pub use session::{FrameReport, Session};
pub use tracker::{LandmarkTracker, RecordedFrame, RecordedTracker};
