//! Sample-ordinal x axis with planner-chosen tick positions.
//!
//! Plotters picks its own "nice" key points for plain numeric ranges; water
//! level charts need ticks exactly at the indices the planner selected, each
//! answering the planner's label. A custom [`Ranged`] implementation keeps
//! the polyline mapping linear while overriding the key points and the label
//! lookup.

use super::ticks::Tick;
use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use std::ops::Range;

#[derive(Clone)]
pub struct SampleIndexRange {
    range: Range<f64>,
    ticks: Vec<Tick>,
}

impl SampleIndexRange {
    /// Axis over `0..len-1` sample ordinals carrying the planned ticks.
    /// Pass an empty tick slice to render a tickless axis.
    pub fn new(len: usize, ticks: &[Tick]) -> Self {
        let end = if len > 1 { (len - 1) as f64 } else { 1.0 };
        Self {
            range: 0.0..end,
            ticks: ticks.to_vec(),
        }
    }

    fn label_for(&self, position: f64) -> Option<&str> {
        self.ticks
            .iter()
            .find(|t| (t.position - position).abs() < 0.5)
            .map(|t| t.label.as_str())
    }
}

impl Ranged for SampleIndexRange {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.range.end - self.range.start;
        if span <= 0.0 {
            return limit.0;
        }
        let normalized = (*value - self.range.start) / span;
        ((limit.1 - limit.0) as f64 * normalized) as i32 + limit.0
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.max_num_points() == 0 {
            return Vec::new();
        }
        self.ticks.iter().map(|t| t.position).collect()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

impl ValueFormatter<f64> for SampleIndexRange {
    fn format_ext(&self, value: &f64) -> String {
        // Positions with no planned tick format as empty rather than fail.
        self.label_for(*value).unwrap_or_default().to_string()
    }
}
