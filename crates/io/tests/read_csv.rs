//! Integration test: reading CSV files from disk.

use std::io::Write;
use std::path::Path;

use climtrend_io::{IoError, ReaderConfig, read_csv};

#[test]
fn read_csv_file_not_found() {
    let path = Path::new("/tmp/climtrend_test_nonexistent_file.csv");
    let err = read_csv(path, &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn read_csv_invalid_config_rejects_early() {
    let path = Path::new("/tmp/climtrend_test_nonexistent_file.csv");
    let config = ReaderConfig::default().with_temp_column("");
    let err = read_csv(path, &config).unwrap_err();
    assert!(
        matches!(err, IoError::Validation { .. }),
        "expected Validation error, got {err:?}",
    );
}

#[test]
fn read_csv_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("weather.csv");
    let mut file = std::fs::File::create(&path).expect("create file");
    writeln!(file, "time,Ktemp").unwrap();
    writeln!(file, "1950-01-01 00:00:00,271.35").unwrap();
    writeln!(file, "1950-01-02 00:00:00,").unwrap();
    writeln!(file, "not a date,272.0").unwrap();
    drop(file);

    let rows = read_csv(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].time(), Some("1950-01-01 00:00:00"));
    assert_eq!(rows[0].kelvin(), Some("271.35"));
    assert_eq!(rows[1].kelvin(), None);
    // unparsable text still reaches the caller; the normalizer drops it
    assert_eq!(rows[2].time(), Some("not a date"));
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "time,Ktemp\n").unwrap();
    let rows = read_csv(&path, &ReaderConfig::default()).unwrap();
    assert!(rows.is_empty());
}
