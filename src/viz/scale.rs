//! Y-axis bounds and tick granularity derived from the day's level range.

use crate::models::Sample;

/// Baseline "normal" water level; the axis never starts above this.
pub const BASELINE_FLOOR: f64 = 6.0;
/// Ceiling of the fine-granularity band.
const NORMAL_CEILING: f64 = 20.0;
/// Ceiling used once the day exhibited a high-water event.
const HIGH_WATER_CEILING: f64 = 50.0;

/// Derived Y-axis window. Recomputed per render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub lower: f64,
    pub upper: f64,
    pub tick_step: f64,
}

impl AxisBounds {
    /// How many labeled gridlines fit the window at `tick_step` spacing.
    pub fn label_count(&self) -> usize {
        (((self.upper - self.lower) / self.tick_step).ceil() as usize) + 1
    }

    /// Multiples of `tick_step` inside `[lower, upper]`, ascending.
    pub fn gridline_values(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut v = (self.lower / self.tick_step).ceil() * self.tick_step;
        while v <= self.upper + 1e-9 {
            out.push(v);
            v += self.tick_step;
        }
        out
    }
}

/// Compute the Y-axis window for a series. `None` for an empty series: the
/// caller must skip rendering entirely.
///
/// The floor sits at [`BASELINE_FLOOR`] unless the observed minimum is lower,
/// in which case the minimum itself becomes the floor so no sample falls
/// outside the visible range. The ceiling is two-tier: a day that peaked above
/// 20.0 gets the coarse 0–50 band (step 5), everything else the fine 0–20
/// band (step 2). Single-sample and zero-variance series go through the same
/// rule unchanged.
pub fn axis_bounds(samples: &[Sample]) -> Option<AxisBounds> {
    if samples.is_empty() {
        return None;
    }
    // Max starts at 0.0 so an all-negative day still keeps the normal ceiling.
    let mut max_level = 0.0_f64;
    let mut min_level = f64::INFINITY;
    for s in samples {
        max_level = max_level.max(s.level);
        min_level = min_level.min(s.level);
    }

    let lower = if min_level < BASELINE_FLOOR {
        min_level
    } else {
        BASELINE_FLOOR
    };
    let (upper, tick_step) = if max_level > NORMAL_CEILING {
        (HIGH_WATER_CEILING, 5.0)
    } else {
        (NORMAL_CEILING, 2.0)
    };

    Some(AxisBounds {
        lower,
        upper,
        tick_step,
    })
}
