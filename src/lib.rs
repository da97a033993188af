//! sump_charts
//!
//! A lightweight Rust library for batch-rendering daily water-level CSV logs
//! into fixed-size PNG line charts. Pairs with the `sumpviz` CLI.
//!
//! ### Features
//! - Tolerant ingestion of `HH:mm:ss,level` logs (malformed lines skipped)
//! - Y-axis bounds and tick granularity derived from the day's level range
//! - Pluggable x-axis tick labeling (hour-boundary, density-adaptive, even-hour markers)
//! - Batch conversion of a directory tree into `<YYYY>/<MM>/` PNG snapshots
//!
//! ### Example
//! ```no_run
//! use sump_charts::{ChartOptions, ChartSpec, render_chart};
//!
//! let samples = sump_charts::reader::read_series("waterlevel-20240316.csv")?;
//! let spec = ChartSpec::new("Water Level on 2024/03/16", samples);
//! render_chart(&spec, &ChartOptions::default(), "waterlevel-20240316.png")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod batch;
pub mod models;
pub mod reader;
pub mod viz;

pub use models::{ChartSpec, Sample};
pub use viz::{ChartOptions, RenderOutcome, TickPolicy, render_chart};
