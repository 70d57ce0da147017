mod common;

use pm_poster::{PosterError, Reading, storage};
use std::fs;

#[test]
fn loads_fixture_in_file_order() {
    let rows = storage::load_readings(common::fixture_csv()).unwrap();
    assert_eq!(rows.first(), Some(&Reading::new("บางนา", 45.2)));
    assert_eq!(rows.last(), Some(&Reading::new("สาทร", 90.1)));
}

#[test]
fn missing_file_is_a_data_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    match storage::load_readings(&path) {
        Err(PosterError::DataFile { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected DataFile, got {other:?}"),
    }
}

#[test]
fn malformed_row_is_distinct_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Location,Value\nบางนา,45.2\nสาทร,สูง\n").unwrap();
    let err = storage::load_readings(&path).unwrap_err();
    assert!(
        matches!(err, PosterError::MalformedRow { line: 3, .. }),
        "{err:?}"
    );
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn ragged_row_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "Location,Value\nA,1.0,extra\n").unwrap();
    assert!(matches!(
        storage::load_readings(&path),
        Err(PosterError::MalformedRow { .. })
    ));
}

#[test]
fn missing_location_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cols.csv");
    fs::write(&path, "Station,Value\nA,1.0\n").unwrap();
    assert!(matches!(
        storage::load_readings(&path),
        Err(PosterError::MissingColumn {
            column: "Location",
            ..
        })
    ));
}

#[test]
fn header_only_file_yields_no_readings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Location,Value\n").unwrap();
    assert!(storage::load_readings(&path).unwrap().is_empty());
}
