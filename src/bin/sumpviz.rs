use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use sump_charts::batch;
use sump_charts::viz::{ChartOptions, TickPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "sumpviz",
    version,
    about = "Batch-render daily water-level CSV logs into PNG line charts"
)]
struct Cli {
    /// Input directory containing waterlevel CSV files
    #[arg(short, long)]
    input_dir: PathBuf,
    /// Output directory for generated chart PNGs
    #[arg(short, long)]
    output_dir: PathBuf,
    /// X-axis tick labeling policy
    #[arg(long, value_enum, default_value_t = TickArg::HourBoundary)]
    ticks: TickArg,
    /// Label the axes ("Time" / "Water Level (cm)")
    #[arg(long, default_value_t = false)]
    axis_titles: bool,
    /// Plot width in pixels (the canvas adds the composited margin)
    #[arg(long, default_value_t = 1600)]
    width: u32,
    /// Plot height in pixels (the canvas adds the composited margin)
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Write a file-list.json gallery index at the output root
    #[arg(long, default_value_t = false)]
    manifest: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TickArg {
    /// One tick per hour-of-day transition
    HourBoundary,
    /// Tick spacing from samples-per-hour density
    Density,
    /// Annotated vertical markers on even hours
    EvenMarkers,
}

impl From<TickArg> for TickPolicy {
    fn from(arg: TickArg) -> Self {
        match arg {
            TickArg::HourBoundary => TickPolicy::HourBoundary,
            TickArg::Density => TickPolicy::DensityAdaptive,
            TickArg::EvenMarkers => TickPolicy::EvenHourMarkers,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let opts = ChartOptions {
        width: cli.width,
        height: cli.height,
        tick_policy: cli.ticks.into(),
        axis_titles: cli.axis_titles,
        ..ChartOptions::default()
    };
    let summary = batch::run_batch(&cli.input_dir, &cli.output_dir, &opts, cli.manifest)?;
    eprintln!(
        "Rendered {} charts to {} ({} empty inputs skipped, {} failures)",
        summary.rendered,
        cli.output_dir.display(),
        summary.skipped_empty,
        summary.failed
    );
    Ok(())
}
