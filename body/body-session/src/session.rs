//! Frame-by-frame study session.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use body_cm::CmCalculator;
use body_kinematics::{DataWriter, KinematicSample, WriterError};
use body_types::{Landmark, Rect};
use tracing::{debug, info, warn};

use crate::{LandmarkTracker, Result, StreamSpec, StudyConfig};

/// Output of one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Index the frame was written under.
    pub frame: u64,
    /// Landmarks the tracker lost on this frame.
    pub lost: Vec<Landmark>,
    /// One sample per stream, in configured stream order.
    pub samples: Vec<(String, KinematicSample)>,
}

/// Drives tracking, CM estimation, and stream output for one study.
///
/// Each call to [`process_frame`](Self::process_frame) runs a frame to
/// completion: every landmark is tracked, the calculator is updated, and one
/// record is written per stream. Frame indices increase by one per call.
pub struct Session<T: LandmarkTracker, W: Write> {
    tracker: T,
    calculator: CmCalculator,
    writer: DataWriter<W>,
    streams: Vec<StreamSpec>,
    rects: Vec<(Landmark, Rect)>,
    search_margin: f64,
    next_frame: u64,
    lost_total: u64,
}

impl<T: LandmarkTracker> Session<T, BufWriter<File>> {
    /// Creates a session writing `<output_dir>/<stream>.csv` files.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the output files
    /// cannot be created.
    pub fn create<P: AsRef<Path>>(config: &StudyConfig, tracker: T, output_dir: P) -> Result<Self> {
        config.validate()?;
        let writer = DataWriter::create(
            output_dir,
            config.streams.iter().map(|s| s.name.clone()),
            config.kinematics_config(),
        )?;
        Self::new(config, tracker, writer)
    }
}

impl<T: LandmarkTracker, W: Write> Session<T, W> {
    /// Creates a session over an already opened writer.
    ///
    /// The writer must have a stream for every configured stream name.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or
    /// [`WriterError::UnknownStream`] if the writer lacks a configured stream.
    pub fn new(config: &StudyConfig, tracker: T, writer: DataWriter<W>) -> Result<Self> {
        config.validate()?;
        if let Some(missing) = config
            .streams
            .iter()
            .find(|spec| writer.state(&spec.name).is_none())
        {
            return Err(WriterError::unknown_stream(missing.name.as_str()).into());
        }
        Ok(Self {
            tracker,
            calculator: CmCalculator::with_rules(
                config.anthropometric_model(),
                config.segment_rules(),
            ),
            writer,
            streams: config.streams.clone(),
            rects: config.seeds()?,
            search_margin: config.search_margin,
            next_frame: config.first_frame,
            lost_total: 0,
        })
    }

    /// The CM calculator, holding the latest frame's landmarks and segments.
    #[must_use]
    pub const fn calculator(&self) -> &CmCalculator {
        &self.calculator
    }

    /// Index the next processed frame will be written under.
    #[must_use]
    pub const fn next_frame(&self) -> u64 {
        self.next_frame
    }

    /// Total landmark losses reported by the tracker so far.
    #[must_use]
    pub const fn lost_total(&self) -> u64 {
        self.lost_total
    }

    /// Processes one frame end to end.
    ///
    /// A landmark the tracker loses keeps its last known rectangle.
    ///
    /// # Errors
    ///
    /// Returns the first calculator or writer error; the run should be
    /// aborted since the streams can no longer stay in step.
    pub fn process_frame(&mut self, frame: &T::Frame) -> Result<FrameReport> {
        let index = self.next_frame;

        let mut lost = Vec::new();
        for (landmark, rect) in &mut self.rects {
            let window = rect.inflate(self.search_margin);
            match self.tracker.track(*landmark, rect, &window, frame) {
                Some(found) => *rect = found,
                None => {
                    warn!(frame = index, landmark = %landmark, "Landmark lost, keeping last position");
                    lost.push(*landmark);
                }
            }
        }
        self.lost_total += lost.len() as u64;

        self.calculator.update_landmarks(self.rects.iter().copied())?;

        let mut samples = Vec::with_capacity(self.streams.len());
        for stream in &self.streams {
            let aggregate = self.calculator.aggregate(stream.free_body)?;
            let lever = stream
                .lever
                .map(|landmark| self.calculator.location(landmark))
                .transpose()?;
            let sample = self.writer.write_frame(
                &stream.name,
                index,
                &aggregate.point,
                aggregate.total_weight,
                lever.as_ref(),
            )?;
            samples.push((stream.name.clone(), sample));
        }

        debug!(frame = index, lost = lost.len(), "Processed frame");
        self.next_frame += 1;
        Ok(FrameReport {
            frame: index,
            lost,
            samples,
        })
    }

    /// Processes every frame in order, returning how many were processed.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first frame error.
    pub fn run<I>(&mut self, frames: I) -> Result<u64>
    where
        I: IntoIterator<Item = T::Frame>,
    {
        let start = self.next_frame;
        info!(first_frame = start, streams = self.streams.len(), "Starting session");

        for frame in frames {
            self.process_frame(&frame)?;
        }

        let processed = self.next_frame - start;
        info!(frames = processed, lost = self.lost_total, "Session complete");
        Ok(processed)
    }

    /// Flushes and releases every stream.
    ///
    /// # Errors
    ///
    /// Returns an error if any stream fails to flush.
    pub fn finish(self) -> Result<BTreeMap<String, W>> {
        Ok(self.writer.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LandmarkSeed, RecordedFrame, RecordedTracker};
    use approx::assert_relative_eq;
    use body_cm::FreeBody;
    use body_types::{Point2, Segment};

    fn square(x: f64, y: f64) -> Rect {
        Rect::centered_at(&Point2::new(x, y), 10.0, 10.0)
    }

    fn pose(dy: f64) -> Vec<(Landmark, Rect)> {
        vec![
            (Landmark::Wrist, square(130.0, 180.0 + dy)),
            (Landmark::Elbow, square(120.0, 140.0 + dy)),
            (Landmark::Shoulder, square(100.0, 100.0 + dy)),
            (Landmark::Hip, square(100.0, 200.0 + dy)),
            (Landmark::Knee, square(100.0, 300.0)),
            (Landmark::Ankle, square(100.0, 400.0)),
            (Landmark::Foot, square(110.0, 410.0)),
        ]
    }

    fn config() -> StudyConfig {
        StudyConfig {
            total_mass: 69.0,
            crop: Rect::new(0.0, 0.0, 640.0, 480.0),
            pixels_per_cm: 4.0,
            frame_duration: 0.22,
            first_frame: 1,
            search_margin: 20.0,
            landmarks: pose(0.0)
                .into_iter()
                .map(|(l, rect)| LandmarkSeed {
                    name: l.name().to_string(),
                    rect,
                })
                .collect(),
            head_offset: None,
            foot_offset: None,
            streams: StreamSpec::standard_set(),
        }
    }

    fn session() -> Session<RecordedTracker, Vec<u8>> {
        let config = config();
        let writer = DataWriter::from_sinks(
            config.kinematics_config(),
            config.streams.iter().map(|s| (s.name.clone(), Vec::new())),
        )
        .unwrap();
        Session::new(&config, RecordedTracker, writer).unwrap()
    }

    fn frame(dy: f64) -> RecordedFrame {
        pose(dy).into_iter().collect()
    }

    #[test]
    fn first_frame_writes_every_stream() {
        let mut s = session();
        let report = s.process_frame(&frame(0.0)).unwrap();
        assert_eq!(report.frame, 1);
        assert!(report.lost.is_empty());

        let names: Vec<&str> = report.samples.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["global", "ankle", "knee", "hip"]);

        let (_, global) = &report.samples[0];
        assert_relative_eq!(global.vertical_force, 69.0 * 9.81, epsilon = 1e-9);
        assert_eq!(s.next_frame(), 2);
    }

    #[test]
    fn stream_weights_follow_free_bodies() {
        let mut s = session();
        let report = s.process_frame(&frame(0.0)).unwrap();
        for ((_, sample), spec) in report.samples.iter().zip(StreamSpec::standard_set()) {
            let weight = s.calculator().aggregate(spec.free_body).unwrap().total_weight;
            assert_relative_eq!(sample.vertical_force, weight * 9.81, epsilon = 1e-9);
        }
    }

    #[test]
    fn lever_arm_measured_from_configured_landmark() {
        let mut s = session();
        let report = s.process_frame(&frame(0.0)).unwrap();
        let calc = s.calculator();

        let hip_cm = calc.aggregate(FreeBody::AboveHip).unwrap().point;
        let hip = calc.location(Landmark::Hip).unwrap();
        let (_, sample) = &report.samples[3];
        assert_relative_eq!(sample.lever_arm, (hip.x - hip_cm.x).abs() / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn upper_body_motion_shows_in_hip_stream() {
        let mut s = session();
        s.process_frame(&frame(0.0)).unwrap();
        // Upper body moves 8 px down: 2 cm in the analysis frame.
        let report = s.process_frame(&frame(8.0)).unwrap();
        let (_, hip) = &report.samples[3];
        assert_relative_eq!(hip.displacement.y, -2.0, epsilon = 1e-9);
        assert_relative_eq!(hip.velocity.y, -2.0 / 0.22, epsilon = 1e-9);
    }

    #[test]
    fn lost_landmark_keeps_last_rect() {
        let mut s = session();
        s.process_frame(&frame(0.0)).unwrap();
        let before = s.calculator().segment_cm(Segment::Trunk).unwrap();

        let mut partial = frame(8.0);
        partial.remove(&Landmark::Shoulder);
        let report = s.process_frame(&partial).unwrap();
        assert_eq!(report.lost, vec![Landmark::Shoulder]);
        assert_eq!(s.lost_total(), 1);

        assert_eq!(
            s.calculator().location(Landmark::Shoulder).unwrap(),
            Point2::new(100.0, 100.0)
        );
        let after = s.calculator().segment_cm(Segment::Trunk).unwrap();
        assert!(after.y > before.y);
    }

    #[test]
    fn run_processes_frames_in_order() {
        let mut s = session();
        let processed = s.run((0..5).map(|i| frame(f64::from(i)))).unwrap();
        assert_eq!(processed, 5);
        assert_eq!(s.next_frame(), 6);

        let sinks = s.finish().unwrap();
        let global = String::from_utf8(sinks["global"].clone()).unwrap();
        let frames: Vec<&str> = global
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(frames, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn missing_stream_in_writer_is_an_error() {
        let config = config();
        let writer =
            DataWriter::from_sinks(config.kinematics_config(), [("global", Vec::<u8>::new())])
                .unwrap();
        assert!(matches!(
            Session::new(&config, RecordedTracker, writer),
            Err(crate::SessionError::Writer(WriterError::UnknownStream { .. }))
        ));
    }
}
