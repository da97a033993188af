//! Batch driver: walk an input tree, render every matching daily log, and
//! organize the PNGs by year/month.
//!
//! Renders are pure per-file pipelines with no shared mutable state, so the
//! driver fans out one worker per file. Every failure below the input root is
//! per-file: logged, counted, and the batch moves on. Only failing to walk
//! the root itself aborts the run.

use crate::models::ChartSpec;
use crate::reader;
use crate::viz::{ChartOptions, RenderOutcome, render_chart};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const FILENAME_PATTERN: &str = r"^waterlevel-(\d{8})\.csv$";

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub skipped_empty: usize,
    pub failed: usize,
}

/// One matched input file and the date embedded in its name.
#[derive(Debug, Clone)]
struct Job {
    input: PathBuf,
    date: NaiveDate,
    /// The matched `YYYYMMDD` digits, reused verbatim in the output name.
    date_digits: String,
}

/// Render every `waterlevel-<YYYYMMDD>.csv` under `input_root` into
/// `<output_root>/<YYYY>/<MM>/waterlevel-<YYYYMMDD>.png`.
///
/// When `write_manifest` is set, a `file-list.json` index of the produced
/// files (keyed year, then month) is written at the output root for the
/// static gallery.
pub fn run_batch(
    input_root: &Path,
    output_root: &Path,
    opts: &ChartOptions,
    write_manifest: bool,
) -> Result<BatchSummary> {
    let pattern = Regex::new(FILENAME_PATTERN).expect("filename pattern");

    let mut jobs = Vec::new();
    collect_jobs(input_root, &pattern, &mut jobs)
        .with_context(|| format!("failed to walk input root {}", input_root.display()))?;
    log::info!(
        "found {} water-level logs under {}",
        jobs.len(),
        input_root.display()
    );

    let results: Vec<(Job, Result<RenderOutcome>)> = jobs
        .into_par_iter()
        .map(|job| {
            let outcome = process_file(&job, output_root, opts);
            (job, outcome)
        })
        .collect();

    let mut summary = BatchSummary::default();
    let mut produced: Vec<&Job> = Vec::new();
    for (job, outcome) in &results {
        match outcome {
            Ok(RenderOutcome::Rendered) => {
                summary.rendered += 1;
                produced.push(job);
            }
            Ok(RenderOutcome::SkippedEmpty) => summary.skipped_empty += 1,
            Err(e) => {
                summary.failed += 1;
                log::error!("{}: {e:#}", job.input.display());
            }
        }
    }

    if write_manifest {
        write_gallery_manifest(output_root, &produced)
            .with_context(|| format!("failed to write manifest under {}", output_root.display()))?;
    }
    Ok(summary)
}

/// Recursive walk collecting files whose names match the water-level pattern.
/// A matched name whose digits are not a calendar date is skipped with a
/// warning rather than failing the walk.
fn collect_jobs(dir: &Path, pattern: &Regex, jobs: &mut Vec<Job>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_jobs(&path, pattern, jobs)?;
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(caps) = pattern.captures(name) else {
            continue;
        };
        let digits = &caps[1];
        match NaiveDate::parse_from_str(digits, "%Y%m%d") {
            Ok(date) => jobs.push(Job {
                input: path.clone(),
                date,
                date_digits: digits.to_string(),
            }),
            Err(_) => log::warn!("skipping {name}: {digits} is not a calendar date"),
        }
    }
    Ok(())
}

fn process_file(job: &Job, output_root: &Path, opts: &ChartOptions) -> Result<RenderOutcome> {
    // Each worker creates its own output subdirectory; create_dir_all is
    // idempotent, an existing directory is not an error.
    let out_dir = output_root
        .join(job.date.format("%Y").to_string())
        .join(job.date.format("%m").to_string());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let samples = reader::read_series(&job.input)?;
    let title = format!("Water Level on {}", job.date.format("%Y/%m/%d"));
    let out_path = out_dir.join(format!("waterlevel-{}.png", job.date_digits));

    log::info!("start generating chart for {title}");
    let spec = ChartSpec::new(title, samples);
    let outcome = render_chart(&spec, opts, &out_path)?;
    match outcome {
        RenderOutcome::Rendered => {
            log::info!("generated chart for {} at {}", spec.title, out_path.display());
        }
        RenderOutcome::SkippedEmpty => {
            log::info!("no data available to generate chart for {}", spec.title);
        }
    }
    Ok(outcome)
}

/// `file-list.json` for the static gallery: `{ "YYYY": { "MM": [files...] } }`,
/// years, months, and files all ascending.
fn write_gallery_manifest(output_root: &Path, produced: &[&Job]) -> Result<()> {
    let mut tree: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
    for job in produced {
        tree.entry(job.date.format("%Y").to_string())
            .or_default()
            .entry(job.date.format("%m").to_string())
            .or_default()
            .push(format!("waterlevel-{}.png", job.date_digits));
    }
    for months in tree.values_mut() {
        for files in months.values_mut() {
            files.sort();
        }
    }
    let path = output_root.join("file-list.json");
    fs::write(&path, serde_json::to_string_pretty(&tree)?)?;
    log::info!("wrote gallery manifest to {}", path.display());
    Ok(())
}
