//! Append-only CSV writer with one output per named stream.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use body_types::Point2;
use tracing::{debug, info, warn};

use crate::{CSV_HEADER, KinematicSample, KinematicsConfig, Result, StreamState, WriterError};

struct Stream<W: Write> {
    sink: W,
    state: StreamState,
    records: u64,
}

/// Writes one kinematic record per stream per frame.
///
/// Each stream keeps its own previous position and velocity, so streams never
/// interfere with each other. Frames for one stream must arrive in increasing
/// order with no gaps.
///
/// Streams are flushed and released by [`finish`](Self::finish); a writer
/// dropped without finishing flushes whatever is still open.
///
/// # Example
///
/// ```
/// use body_kinematics::{DataWriter, FrameTransform, KinematicsConfig};
/// use body_types::Point2;
///
/// let config = KinematicsConfig::new(FrameTransform::new(480.0, 4.0));
/// let mut writer = DataWriter::from_sinks(config, [("global", Vec::<u8>::new())]).unwrap();
///
/// let sample = writer
///     .write_frame("global", 1, &Point2::new(40.0, 400.0), 69.0, None)
///     .unwrap();
/// assert_eq!(sample.position, Point2::new(10.0, 20.0));
///
/// let sinks = writer.finish().unwrap();
/// let csv = String::from_utf8(sinks["global"].clone()).unwrap();
/// assert_eq!(csv.lines().count(), 2);
/// ```
pub struct DataWriter<W: Write> {
    config: KinematicsConfig,
    streams: BTreeMap<String, Stream<W>>,
}

impl DataWriter<BufWriter<File>> {
    /// Opens `<dir>/<name>.csv` for every stream name, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a name repeats, or a
    /// file cannot be created or written.
    pub fn create<P, I, S>(dir: P, names: I, config: KinematicsConfig) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut sinks = Vec::new();
        for name in names {
            let name = name.into();
            let path = dir.join(format!("{name}.csv"));
            debug!(stream = %name, path = %path.display(), "Opening stream file");
            sinks.push((name, BufWriter::new(File::create(&path)?)));
        }

        Self::from_sinks(config, sinks)
    }
}

impl<W: Write> DataWriter<W> {
    /// Creates a writer over arbitrary sinks and writes the CSV header to each.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a name repeats, or a
    /// header cannot be written.
    pub fn from_sinks<I, S>(config: KinematicsConfig, sinks: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, W)>,
        S: Into<String>,
    {
        config.validate()?;

        let mut writer = Self {
            config,
            streams: BTreeMap::new(),
        };
        for (name, sink) in sinks {
            let name = name.into();
            if writer.streams.contains_key(&name) {
                return Err(WriterError::DuplicateStream { name });
            }
            let mut stream = Stream {
                sink,
                state: StreamState::new(),
                records: 0,
            };
            writeln!(stream.sink, "{CSV_HEADER}")?;
            writer.streams.insert(name, stream);
        }

        info!(
            streams = writer.streams.len(),
            frame_duration = config.frame_duration,
            "Opened kinematic streams"
        );
        Ok(writer)
    }

    /// The writer configuration.
    #[must_use]
    pub const fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    /// Names of the open streams, sorted.
    pub fn stream_names(&self) -> impl Iterator<Item = &str> {
        self.streams.keys().map(String::as_str)
    }

    /// Finite-difference state of a stream.
    #[must_use]
    pub fn state(&self, stream: &str) -> Option<&StreamState> {
        self.streams.get(stream).map(|s| &s.state)
    }

    /// Computes and writes one record for `stream`.
    ///
    /// `raw_position` and `lever_reference` are in image pixels; both are
    /// reframed before use. `weight` is the free-body mass the force estimate
    /// scales with.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::UnknownStream`] if the stream was not opened, or
    /// [`WriterError::Io`] if the record cannot be written.
    pub fn write_frame(
        &mut self,
        stream: &str,
        frame: u64,
        raw_position: &Point2,
        weight: f64,
        lever_reference: Option<&Point2>,
    ) -> Result<KinematicSample> {
        let config = self.config;
        let entry = self
            .streams
            .get_mut(stream)
            .ok_or_else(|| WriterError::unknown_stream(stream))?;

        let position = config.transform.reframe(raw_position);
        let motion = entry.state.advance(position, config.frame_duration);
        let vertical_force = weight * (motion.acceleration.y + config.gravity);
        let lever_arm = lever_reference.map_or(0.0, |reference| {
            (config.transform.reframe(reference).x - position.x).abs()
        });

        let sample = KinematicSample {
            frame,
            position,
            displacement: motion.displacement,
            velocity: motion.velocity,
            acceleration: motion.acceleration,
            vertical_force,
            lever_arm,
        };

        writeln!(entry.sink, "{sample}")?;
        entry.records += 1;
        debug!(stream, frame, fg = vertical_force, "Wrote kinematic record");
        Ok(sample)
    }

    /// Flushes every stream and hands the sinks back.
    ///
    /// Every stream is flushed even if an earlier one fails; the first failure
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if any stream fails to flush.
    pub fn finish(mut self) -> Result<BTreeMap<String, W>> {
        let streams = std::mem::take(&mut self.streams);
        let mut first_error = None;
        let mut sinks = BTreeMap::new();

        for (name, mut stream) in streams {
            if let Err(e) = stream.sink.flush() {
                warn!(stream = %name, error = %e, "Failed to flush stream");
                first_error.get_or_insert(e);
            }
            info!(stream = %name, records = stream.records, "Closed kinematic stream");
            sinks.insert(name, stream.sink);
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(sinks),
        }
    }
}

impl<W: Write> Drop for DataWriter<W> {
    fn drop(&mut self) {
        for (name, stream) in &mut self.streams {
            if let Err(e) = stream.sink.flush() {
                warn!(stream = %name, error = %e, "Failed to flush stream on drop");
            }
        }
    }
}
