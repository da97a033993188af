use chrono::NaiveTime;
use std::io::Write;
use sump_charts::reader::{ReadError, read_series};
use tempfile::tempdir;

fn write_log(dir: &std::path::Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    path
}

#[test]
fn valid_lines_survive_in_file_order() {
    let dir = tempdir().unwrap();
    let path = write_log(
        dir.path(),
        "waterlevel-20240316.csv",
        &[
            "06:00:00,5.2",
            "garbage line with no comma",
            "06:10:00,5.4",
            "25:99:00,5.5",
            "06:20:00,not-a-number",
            "06:30:00,5.6,extra-column",
            "06:40:00,5.8",
            "",
        ],
    );

    let samples = read_series(&path).unwrap();
    let levels: Vec<f64> = samples.iter().map(|s| s.level).collect();
    assert_eq!(levels, [5.2, 5.4, 5.8]);
    assert_eq!(samples[0].time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    assert_eq!(samples[2].time, NaiveTime::from_hms_opt(6, 40, 0).unwrap());
}

#[test]
fn fully_malformed_file_yields_empty_series() {
    let dir = tempdir().unwrap();
    let path = write_log(
        dir.path(),
        "waterlevel-20240317.csv",
        &["header,that,should,not,be,here", "x,y"],
    );
    assert!(read_series(&path).unwrap().is_empty());
}

#[test]
fn empty_file_yields_empty_series() {
    let dir = tempdir().unwrap();
    let path = write_log(dir.path(), "waterlevel-20240318.csv", &[]);
    assert!(read_series(&path).unwrap().is_empty());
}

#[test]
fn negative_levels_are_data_not_errors() {
    let dir = tempdir().unwrap();
    let path = write_log(dir.path(), "waterlevel-20240319.csv", &["03:00:00,-1.25"]);
    let samples = read_series(&path).unwrap();
    assert_eq!(samples[0].level, -1.25);
}

#[test]
fn unreadable_path_is_a_typed_open_error() {
    let dir = tempdir().unwrap();
    let err = read_series(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, ReadError::Open { .. }));
    assert!(err.to_string().contains("missing.csv"));
}
