//! File-backed stream output.

use std::fs;

use body_kinematics::{CSV_HEADER, DataWriter, FrameTransform, KinematicsConfig, WriterError};
use body_types::Point2;

fn config() -> KinematicsConfig {
    KinematicsConfig::new(FrameTransform::new(480.0, 4.0))
}

#[test]
fn creates_one_file_per_stream() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("run-01");

    let mut writer = DataWriter::create(&out, ["global", "ankle", "knee", "hip"], config()).unwrap();
    for frame in 1..=5 {
        #[allow(clippy::cast_precision_loss)]
        let x = 100.0 + frame as f64 * 4.0;
        for name in ["global", "ankle", "knee", "hip"] {
            writer
                .write_frame(name, frame, &Point2::new(x, 240.0), 69.0, Some(&Point2::new(100.0, 470.0)))
                .unwrap();
        }
    }
    writer.finish().unwrap();

    for name in ["global", "ankle", "knee", "hip"] {
        let text = fs::read_to_string(out.join(format!("{name}.csv"))).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6, "{name}");
        assert_eq!(lines[0], CSV_HEADER);
        // x moves 1 cm per frame: velocity 1 / 0.22 cm/s
        assert_eq!(
            lines[2],
            "2,27.00000,60.00000,1.00000,0.00000,4.54545,0.00000,20.66116,0.00000,676.89000,2.00000"
        );
    }
}

#[test]
fn dropped_writer_flushes_records() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut writer = DataWriter::create(dir.path(), ["global"], config()).unwrap();
        writer
            .write_frame("global", 1, &Point2::new(0.0, 480.0), 50.0, None)
            .unwrap();
        // Early exit without finish().
    }
    let text = fs::read_to_string(dir.path().join("global.csv")).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn unwritable_destination_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"x").unwrap();

    let result = DataWriter::create(&blocker, ["global"], config());
    assert!(matches!(result, Err(WriterError::Io(_))));
}
