//! Tolerant CSV ingestion for daily water-level logs.
//!
//! Input files are headerless, two columns per line: `HH:mm:ss,level`.
//! Malformed lines (wrong field count, unparsable time, unparsable level)
//! are skipped, never fatal; only opening the file or an I/O failure while
//! reading it is an error.

use crate::models::Sample;
use chrono::NaiveTime;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: csv::Error },
    #[error("I/O failure while reading {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },
}

/// Read one day's samples, in file order.
///
/// A file with N parsable and M unparsable lines yields exactly N samples.
/// An empty (or fully unparsable) file yields an empty vector, not an error.
pub fn read_series<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>, ReadError> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut samples = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) if e.is_io_error() => {
                return Err(ReadError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                log::debug!("skipping unreadable record in {}: {e}", path.display());
                continue;
            }
        };
        if record.len() != 2 {
            log::debug!(
                "skipping {}-field line in {}",
                record.len(),
                path.display()
            );
            continue;
        }
        let time = match NaiveTime::parse_from_str(record[0].trim(), TIME_FORMAT) {
            Ok(t) => t,
            Err(_) => {
                log::debug!("skipping line with bad time {:?} in {}", &record[0], path.display());
                continue;
            }
        };
        let level = match record[1].trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                log::debug!(
                    "skipping line with bad level {:?} in {}",
                    &record[1],
                    path.display()
                );
                continue;
            }
        };
        samples.push(Sample { time, level });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waterlevel-20240301.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "06:00:00,5.2").unwrap();
        writeln!(f, "not-a-time,7.0").unwrap();
        writeln!(f, "06:10:00,oops").unwrap();
        writeln!(f, "06:20:00,5.4,extra").unwrap();
        writeln!(f, "06:30:00,5.6").unwrap();
        drop(f);

        let samples = read_series(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].level, 5.2);
        assert_eq!(samples[1].level, 5.6);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempdir().unwrap();
        let err = read_series(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }
}
