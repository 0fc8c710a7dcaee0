//! Study configuration.
//!
//! A study is one subject filmed with one camera setup. Its configuration is
//! loaded from JSON:
//!
//! ```json
//! {
//!   "total_mass": 69.0,
//!   "crop": { "x": 0.0, "y": 0.0, "width": 640.0, "height": 480.0 },
//!   "pixels_per_cm": 4.0,
//!   "landmarks": [
//!     { "name": "Wrist", "rect": { "x": 125.0, "y": 175.0, "width": 10.0, "height": 10.0 } }
//!   ],
//!   "streams": [
//!     { "name": "global", "free_body": "Global", "lever": "Ankle" }
//!   ]
//! }
//! ```
//!
//! `frame_duration`, `first_frame`, `search_margin`, `head_offset`,
//! `foot_offset` and `streams` are optional.

use std::collections::BTreeSet;
use std::path::Path;

use body_cm::{AnthropometricModel, CmRule, FreeBody, SegmentRules};
use body_kinematics::{DEFAULT_FRAME_DURATION, FrameTransform, KinematicsConfig};
use body_types::{Landmark, Rect, Segment};
use serde::{Deserialize, Serialize};

use crate::{Result, SessionError};

/// Initial rectangle of one landmark, as marked on the first frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSeed {
    /// Landmark name (case-insensitive).
    pub name: String,
    /// Rectangle around the landmark on the first frame.
    pub rect: Rect,
}

/// One output stream: which free body it follows and its lever reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSpec {
    /// Stream name, also the output file stem.
    pub name: String,
    /// Free body whose CM and mass the stream records.
    pub free_body: FreeBody,
    /// Landmark the lever arm is measured from, if any.
    #[serde(default)]
    pub lever: Option<Landmark>,
}

impl StreamSpec {
    /// Creates a stream specification.
    #[must_use]
    pub fn new(name: impl Into<String>, free_body: FreeBody, lever: Option<Landmark>) -> Self {
        Self {
            name: name.into(),
            free_body,
            lever,
        }
    }

    /// The four streams of the link-segment analysis.
    #[must_use]
    pub fn standard_set() -> Vec<Self> {
        vec![
            Self::new("global", FreeBody::Global, Some(Landmark::Ankle)),
            Self::new("ankle", FreeBody::AboveAnkle, Some(Landmark::Ankle)),
            Self::new("knee", FreeBody::AboveKnee, Some(Landmark::Knee)),
            Self::new("hip", FreeBody::AboveHip, Some(Landmark::Hip)),
        ]
    }
}

const fn default_frame_duration() -> f64 {
    DEFAULT_FRAME_DURATION
}

const fn default_first_frame() -> u64 {
    1
}

const fn default_search_margin() -> f64 {
    20.0
}

/// Everything needed to run a study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Subject body mass (kg).
    pub total_mass: f64,
    /// Crop rectangle of the analysed image region (pixels).
    pub crop: Rect,
    /// Image scale, pixels per centimeter.
    pub pixels_per_cm: f64,
    /// Time between frames (seconds).
    #[serde(default = "default_frame_duration")]
    pub frame_duration: f64,
    /// Index written for the first processed frame.
    #[serde(default = "default_first_frame")]
    pub first_frame: u64,
    /// Pixels added on every side of a landmark's last rectangle to form the
    /// tracker search window.
    #[serde(default = "default_search_margin")]
    pub search_margin: f64,
    /// Initial landmark rectangles, in tracking order.
    pub landmarks: Vec<LandmarkSeed>,
    /// Pixel offset of the head CM from the shoulder, if not the default.
    #[serde(default)]
    pub head_offset: Option<[f64; 2]>,
    /// Pixel offset of the foot CM from the foot landmark, if not the default.
    #[serde(default)]
    pub foot_offset: Option<[f64; 2]>,
    /// Output streams, written in this order each frame.
    #[serde(default = "StreamSpec::standard_set")]
    pub streams: Vec<StreamSpec>,
}

impl StudyConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Parse`] for malformed JSON, or
    /// [`SessionError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_json_str`](Self::from_json_str).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfig`] describing the first problem
    /// found.
    pub fn validate(&self) -> Result<()> {
        if !self.total_mass.is_finite() || self.total_mass <= 0.0 {
            return Err(SessionError::invalid_config(format!(
                "total mass must be positive, got {}",
                self.total_mass
            )));
        }
        if !self.crop.is_valid() {
            return Err(SessionError::invalid_config("crop rectangle is not valid"));
        }
        if !self.search_margin.is_finite() || self.search_margin < 0.0 {
            return Err(SessionError::invalid_config(
                "search margin must be non-negative",
            ));
        }

        self.kinematics_config().validate()?;

        let mut seen = BTreeSet::new();
        for seed in &self.landmarks {
            let landmark = seed.name.parse::<Landmark>()?;
            if !seen.insert(landmark) {
                return Err(SessionError::invalid_config(format!(
                    "landmark {landmark} is listed twice"
                )));
            }
            if !seed.rect.is_valid() {
                return Err(SessionError::invalid_config(format!(
                    "rectangle for {landmark} is not valid"
                )));
            }
        }
        if let Some(missing) = Landmark::ALL.into_iter().find(|l| !seen.contains(l)) {
            return Err(SessionError::invalid_config(format!(
                "landmark {missing} has no initial rectangle"
            )));
        }

        if self.streams.is_empty() {
            return Err(SessionError::invalid_config("no output streams"));
        }
        let mut names = BTreeSet::new();
        for stream in &self.streams {
            if stream.name.trim().is_empty() {
                return Err(SessionError::invalid_config("stream name is empty"));
            }
            if !names.insert(stream.name.as_str()) {
                return Err(SessionError::invalid_config(format!(
                    "stream {} is listed twice",
                    stream.name
                )));
            }
        }

        Ok(())
    }

    /// Mass model for the subject.
    #[must_use]
    pub const fn anthropometric_model(&self) -> AnthropometricModel {
        AnthropometricModel::new(self.total_mass)
    }

    /// Segment rules with this study's head and foot offsets applied.
    #[must_use]
    pub fn segment_rules(&self) -> SegmentRules {
        let mut rules = SegmentRules::standard();
        if let Some([dx, dy]) = self.head_offset {
            rules = rules.with_rule(Segment::Head, CmRule::offset(Landmark::Shoulder, dx, dy));
        }
        if let Some([dx, dy]) = self.foot_offset {
            rules = rules.with_rule(Segment::Foot, CmRule::offset(Landmark::Foot, dx, dy));
        }
        rules
    }

    /// Kinematic stream settings for this study.
    #[must_use]
    pub fn kinematics_config(&self) -> KinematicsConfig {
        KinematicsConfig::new(FrameTransform::from_crop(&self.crop, self.pixels_per_cm))
            .frame_duration(self.frame_duration)
    }

    /// Landmark seeds parsed into typed landmarks, in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Body`] for an unknown landmark name.
    pub fn seeds(&self) -> Result<Vec<(Landmark, Rect)>> {
        self.landmarks
            .iter()
            .map(|seed| -> Result<(Landmark, Rect)> { Ok((seed.name.parse::<Landmark>()?, seed.rect)) })
            .collect()
    }
}
