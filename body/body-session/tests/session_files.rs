//! End-to-end session runs writing CSV files.

use std::fs;

use body_session::{RecordedFrame, RecordedTracker, Session, SessionError, StudyConfig};
use body_types::{Landmark, Point2, Rect};

const STUDY: &str = r#"{
    "total_mass": 69.0,
    "crop": { "x": 0.0, "y": 0.0, "width": 640.0, "height": 480.0 },
    "pixels_per_cm": 4.0,
    "landmarks": [
        { "name": "Wrist",    "rect": { "x": 125.0, "y": 175.0, "width": 10.0, "height": 10.0 } },
        { "name": "Elbow",    "rect": { "x": 115.0, "y": 135.0, "width": 10.0, "height": 10.0 } },
        { "name": "Shoulder", "rect": { "x": 95.0,  "y": 95.0,  "width": 10.0, "height": 10.0 } },
        { "name": "Hip",      "rect": { "x": 95.0,  "y": 195.0, "width": 10.0, "height": 10.0 } },
        { "name": "Knee",     "rect": { "x": 95.0,  "y": 295.0, "width": 10.0, "height": 10.0 } },
        { "name": "Ankle",    "rect": { "x": 95.0,  "y": 395.0, "width": 10.0, "height": 10.0 } },
        { "name": "Foot",     "rect": { "x": 105.0, "y": 405.0, "width": 10.0, "height": 10.0 } }
    ]
}"#;

fn frame(dx: f64) -> RecordedFrame {
    [
        (Landmark::Wrist, 130.0, 180.0),
        (Landmark::Elbow, 120.0, 140.0),
        (Landmark::Shoulder, 100.0, 100.0),
        (Landmark::Hip, 100.0, 200.0),
        (Landmark::Knee, 100.0, 300.0),
        (Landmark::Ankle, 100.0, 400.0),
        (Landmark::Foot, 110.0, 410.0),
    ]
    .into_iter()
    .map(|(l, x, y)| (l, Rect::centered_at(&Point2::new(x + dx, y), 10.0, 10.0)))
    .collect()
}

#[test]
fn run_writes_standard_streams() {
    let dir = tempfile::tempdir().unwrap();
    let config = StudyConfig::from_json_str(STUDY).unwrap();

    let mut session = Session::create(&config, RecordedTracker, dir.path()).unwrap();
    let processed = session.run((0..4).map(|i| frame(f64::from(i) * 4.0))).unwrap();
    assert_eq!(processed, 4);
    session.finish().unwrap();

    for name in ["global", "ankle", "knee", "hip"] {
        let text = fs::read_to_string(dir.path().join(format!("{name}.csv"))).unwrap();
        let rows: Vec<Vec<&str>> = text.lines().skip(1).map(|l| l.split(',').collect()).collect();
        assert_eq!(rows.len(), 4, "{name}");
        for row in &rows {
            assert_eq!(row.len(), 11);
            assert!(row[1..].iter().all(|v| v.split('.').nth(1).map(str::len) == Some(5)));
        }
        // Whole body shifts 1 cm per frame: constant velocity, no acceleration.
        assert_eq!(rows[2][3], "1.00000", "{name}");
        assert!(rows[3][7].parse::<f64>().unwrap().abs() < 1e-6, "{name}");
        assert_eq!(rows[3][8], "0.00000", "{name}");
    }
}

#[test]
fn config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("study.json");
    fs::write(&path, STUDY).unwrap();

    let config = StudyConfig::load(&path).unwrap();
    assert_eq!(config.first_frame, 1);
    assert_eq!(config.streams.len(), 4);

    assert!(matches!(
        StudyConfig::load(dir.path().join("missing.json")),
        Err(SessionError::Io(_))
    ));
}
