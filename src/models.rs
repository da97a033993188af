use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One water-level observation: wall-clock time-of-day plus the measured level.
///
/// Levels are taken as-is from the log (no range validation); times have
/// second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: NaiveTime,
    pub level: f64,
}

/// The sole input to one render: a chart title and the day's samples.
///
/// Samples keep the order they appeared in the source file; a series may be
/// empty, in which case the renderer skips the chart instead of drawing one.
/// A spec is built once per input file, rendered once, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub samples: Vec<Sample>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            title: title.into(),
            samples,
        }
    }
}
