//! X-axis tick planning.
//!
//! The x axis is sample-ordinal (0..N-1), not elapsed time, so irregular
//! sampling never leaves visual gaps. The planner decides which indices get a
//! labeled tick; the renderer only places what it is given.

use crate::models::Sample;
use chrono::Timelike;

const SECONDS_PER_DAY: i64 = 86_400;

/// A labeled reference mark on the ordinal x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Sample index on the ordinal axis.
    pub position: f64,
    pub label: String,
}

/// How tick indices and labels are chosen, selected per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPolicy {
    /// One tick at each hour-of-day transition, labeled `HH:00`.
    HourBoundary,
    /// Ticks every `round(samples per hour)` indices, labeled with the
    /// `HH:mm` of the sample at the tick index.
    DensityAdaptive,
    /// At most one marker per even hour, labeled `HH:00`; rendered as
    /// annotated vertical markers instead of native axis ticks.
    EvenHourMarkers,
}

/// Plan the ticks for a series under the given policy.
pub fn plan_ticks(samples: &[Sample], policy: TickPolicy) -> Vec<Tick> {
    if samples.is_empty() {
        return Vec::new();
    }
    match policy {
        TickPolicy::HourBoundary => hour_boundary_ticks(samples),
        TickPolicy::DensityAdaptive => density_adaptive_ticks(samples),
        TickPolicy::EvenHourMarkers => even_hour_markers(samples),
    }
}

/// Pure positional lookup: the `HH:mm` label of the sample at `position`,
/// or an empty label when the position falls outside `[0, len)`.
pub fn label_at(position: f64, samples: &[Sample]) -> String {
    let idx = position.round();
    if idx < 0.0 || idx >= samples.len() as f64 {
        return String::new();
    }
    samples[idx as usize].time.format("%H:%M").to_string()
}

/// Index spacing for the density-adaptive policy.
///
/// `round(samples per hour)`, falling back to `count / 24` when the data is
/// too sparse for that to be positive, and never below one index.
pub fn density_step(sample_count: usize, elapsed_seconds: i64) -> usize {
    let elapsed = elapsed_seconds.max(1) as f64;
    let samples_per_hour = sample_count as f64 / (elapsed / 3600.0);
    let mut step = samples_per_hour.round() as usize;
    if step == 0 {
        step = sample_count / 24;
    }
    step.max(1)
}

fn hour_boundary_ticks(samples: &[Sample]) -> Vec<Tick> {
    let mut ticks = Vec::new();
    let mut last_hour: Option<u32> = None;
    for (i, s) in samples.iter().enumerate() {
        let hour = s.time.hour();
        if last_hour != Some(hour) {
            // A backward clock shift makes an hour value recur later in the
            // file; the repeat gets its own tick.
            ticks.push(Tick {
                position: i as f64,
                label: format!("{hour:02}:00"),
            });
            last_hour = Some(hour);
        }
    }
    ticks
}

fn density_adaptive_ticks(samples: &[Sample]) -> Vec<Tick> {
    let n = samples.len();
    let first = samples[0].time;
    let last = samples[n - 1].time;
    let mut elapsed = last.signed_duration_since(first).num_seconds();
    if elapsed < 0 {
        // Samples wrapped past midnight.
        elapsed += SECONDS_PER_DAY;
    }
    let step = density_step(n, elapsed);

    let mut ticks = Vec::new();
    let mut i = 0;
    while i < n {
        ticks.push(Tick {
            position: i as f64,
            label: label_at(i as f64, samples),
        });
        i += step;
    }
    ticks
}

fn even_hour_markers(samples: &[Sample]) -> Vec<Tick> {
    let mut seen = [false; 24];
    let mut ticks = Vec::new();
    for (i, s) in samples.iter().enumerate() {
        let hour = s.time.hour() as usize;
        if hour % 2 == 0 && !seen[hour] {
            seen[hour] = true;
            ticks.push(Tick {
                position: i as f64,
                label: format!("{hour:02}:00"),
            });
        }
    }
    ticks
}
