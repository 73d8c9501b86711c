use super::*;
use std::path::PathBuf;

#[test]
fn invalid_index_without_selection_reads_as_no_selection() {
    let err = PlaybackError::InvalidIndex {
        index: None,
        len: 3,
    };
    assert!(err.is_no_selection());
    assert_eq!(err.to_string(), "no track selected");
}

#[test]
fn invalid_index_out_of_range_names_the_index() {
    let err = PlaybackError::InvalidIndex {
        index: Some(9),
        len: 3,
    };
    assert!(!err.is_no_selection());
    assert_eq!(err.to_string(), "track index 9 is out of range (3 tracks)");
}

#[test]
fn open_error_names_the_file() {
    let err = PlaybackError::Open {
        path: PathBuf::from("/music/a.wav"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(err.to_string(), "failed to open /music/a.wav: gone");
}

#[test]
fn rodio_engine_reports_missing_files_before_touching_the_device() {
    // Only runs where an output device exists; CI boxes usually have none.
    let Ok(mut engine) = RodioEngine::open_default() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let err = engine.load(&dir.path().join("missing.wav")).err().unwrap();
    assert!(matches!(err, PlaybackError::Open { .. }));
}

#[test]
fn rodio_engine_reports_undecodable_files() {
    let Ok(mut engine) = RodioEngine::open_default() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.wav");
    std::fs::write(&path, b"definitely not a wave file").unwrap();
    let err = engine.load(&path).err().unwrap();
    assert!(matches!(err, PlaybackError::Decode { .. }));
}
