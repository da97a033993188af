//! Chart rendering: compose the water-level polyline, gridlines, and labeled
//! ticks onto a fixed-size raster canvas and encode it as PNG.
//!
//! - Y window and tick granularity come from [`scale`]
//! - X tick indices and labels come from [`ticks`], pluggable per render
//! - The x axis is sample-ordinal, so irregular sampling plots gap-free

pub mod axis;
pub mod scale;
pub mod ticks;
pub mod util;

pub use scale::{AxisBounds, axis_bounds};
pub use ticks::{Tick, TickPolicy, label_at, plan_ticks};

use crate::models::ChartSpec;
use anyhow::Result;
use axis::SampleIndexRange;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use std::path::Path;
use util::{ACCENT, GRIDLINE, compute_left_label_area_px, format_level};

/// Per-render configuration. The defaults reproduce the production snapshot
/// layout: 1600x900 plot on a canvas padded by a 20px top/right margin,
/// hour-boundary ticks, no axis titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Plot width in pixels; the canvas adds `margin`.
    pub width: u32,
    /// Plot height in pixels; the canvas adds `margin`.
    pub height: u32,
    /// Composited margin above and right of the plot. Left and bottom stay
    /// margin-free.
    pub margin: u32,
    pub tick_policy: TickPolicy,
    /// Label the axes ("Time" / "Water Level (cm)") when set.
    pub axis_titles: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            margin: 20,
            tick_policy: TickPolicy::HourBoundary,
            axis_titles: false,
        }
    }
}

/// What one render call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A PNG was written to the requested path.
    Rendered,
    /// The series was empty; nothing was drawn and no file was produced.
    SkippedEmpty,
}

/// Render one day's chart to `out_path`.
///
/// An empty series is a signal, not an error: the function returns
/// [`RenderOutcome::SkippedEmpty`] without touching the output path, because
/// an empty or malformed image is worse than no image.
pub fn render_chart<P: AsRef<Path>>(
    spec: &ChartSpec,
    opts: &ChartOptions,
    out_path: P,
) -> Result<RenderOutcome> {
    let Some(bounds) = axis_bounds(&spec.samples) else {
        return Ok(RenderOutcome::SkippedEmpty);
    };
    let ticks = plan_ticks(&spec.samples, opts.tick_policy);
    let marker_mode = opts.tick_policy == TickPolicy::EvenHourMarkers;
    // In marker mode the ticks become in-plot annotations, not axis ticks.
    let axis_ticks: &[Tick] = if marker_mode { &[] } else { &ticks };
    let x_axis = SampleIndexRange::new(spec.samples.len(), axis_ticks);

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let canvas = (opts.width + opts.margin, opts.height + opts.margin);

    let root = BitMapBackend::new(path_string.as_str(), canvas).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let plot_area = root.margin(opts.margin, 0, 0, opts.margin);

    let left_label_px = compute_left_label_area_px(&bounds, 12);
    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&spec.title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, left_label_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_axis, bounds.lower..bounds.upper)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .bold_line_style(GRIDLINE)
        .light_line_style(TRANSPARENT)
        .y_labels(bounds.label_count())
        .y_label_formatter(&|v: &f64| format_level(*v))
        .label_style((FontFamily::SansSerif, 12));
    if opts.axis_titles {
        mesh.x_desc("Time")
            .y_desc("Water Level (cm)")
            .axis_desc_style((FontFamily::SansSerif, 16));
    }
    mesh.draw().map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Levels outside the y window stay in the data; the drawing area clips
    // the polyline instead of clamping values.
    let series: Vec<(f64, f64)> = spec
        .samples
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.level))
        .collect();
    chart
        .draw_series(LineSeries::new(
            series,
            ShapeStyle {
                color: ACCENT.to_rgba(),
                filled: false,
                stroke_width: 2,
            },
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    if marker_mode {
        draw_hour_markers(&mut chart, &ticks, &bounds)?;
    }

    root.present().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(RenderOutcome::Rendered)
}

/// Annotated vertical markers for [`TickPolicy::EvenHourMarkers`]: one faint
/// line per labeled hour with its `HH:00` text sitting just above the bottom
/// edge of the plot.
fn draw_hour_markers<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<SampleIndexRange, RangedCoordf64>>,
    ticks: &[Tick],
    bounds: &AxisBounds,
) -> Result<()>
where
    DB: DrawingBackend,
{
    chart
        .draw_series(ticks.iter().map(|t| {
            PathElement::new(
                vec![(t.position, bounds.lower), (t.position, bounds.upper)],
                GRIDLINE.mix(0.35),
            )
        }))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let label_y = bounds.lower + (bounds.upper - bounds.lower) * 0.02;
    let style = TextStyle::from((FontFamily::SansSerif, 13))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(
            ticks
                .iter()
                .map(|t| Text::new(t.label.clone(), (t.position, label_y), style.clone())),
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
