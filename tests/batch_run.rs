use std::fs;
use std::io::Write;
use std::path::Path;
use sump_charts::batch::run_batch;
use sump_charts::viz::ChartOptions;
use tempfile::tempdir;

fn small_opts() -> ChartOptions {
    ChartOptions {
        width: 640,
        height: 360,
        ..ChartOptions::default()
    }
}

fn write_file(path: &Path, lines: &[&str]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = fs::File::create(path).unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
}

#[test]
fn batch_renders_matched_files_into_year_month_tree() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_file(
        &input.path().join("waterlevel-20240316.csv"),
        &["06:00:00,5.0", "06:30:00,7.0", "07:00:00,25.0"],
    );
    // Nested directories are walked too.
    write_file(
        &input.path().join("2023/archive/waterlevel-20231105.csv"),
        &["01:00:00,8.0", "02:00:00,8.5"],
    );
    // Ignored: name does not match the pattern.
    write_file(&input.path().join("levels-20240316.csv"), &["06:00:00,5.0"]);
    // Ignored with a warning: eight digits, but not a date.
    write_file(&input.path().join("waterlevel-20249999.csv"), &["06:00:00,5.0"]);
    // Skipped: matches, but has no parsable data.
    write_file(&input.path().join("waterlevel-20240401.csv"), &["nonsense"]);

    let summary = run_batch(input.path(), output.path(), &small_opts(), false).unwrap();
    assert_eq!(summary.rendered, 2);
    assert_eq!(summary.skipped_empty, 1);
    assert_eq!(summary.failed, 0);

    let png_2024 = output.path().join("2024/03/waterlevel-20240316.png");
    let png_2023 = output.path().join("2023/11/waterlevel-20231105.png");
    assert!(png_2024.exists());
    assert!(png_2023.exists());
    assert!(fs::metadata(&png_2024).unwrap().len() > 0);
    // The empty input produced a directory but no image.
    assert!(output.path().join("2024/04").exists());
    assert!(!output.path().join("2024/04/waterlevel-20240401.png").exists());
}

#[test]
fn batch_is_idempotent_over_existing_output_dirs() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_file(
        &input.path().join("waterlevel-20240316.csv"),
        &["06:00:00,5.0", "07:00:00,6.0"],
    );

    let first = run_batch(input.path(), output.path(), &small_opts(), false).unwrap();
    let second = run_batch(input.path(), output.path(), &small_opts(), false).unwrap();
    assert_eq!(first.rendered, 1);
    assert_eq!(second.rendered, 1);
}

#[test]
fn missing_input_root_is_fatal() {
    let output = tempdir().unwrap();
    let gone = output.path().join("does-not-exist");
    assert!(run_batch(&gone, output.path(), &small_opts(), false).is_err());
}

#[test]
fn manifest_lists_produced_files_by_year_and_month() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_file(
        &input.path().join("waterlevel-20240316.csv"),
        &["06:00:00,5.0", "07:00:00,6.0"],
    );
    write_file(
        &input.path().join("waterlevel-20240301.csv"),
        &["06:00:00,5.0", "07:00:00,6.0"],
    );
    write_file(
        &input.path().join("waterlevel-20231105.csv"),
        &["06:00:00,5.0", "07:00:00,6.0"],
    );
    // Empty inputs never reach the manifest.
    write_file(&input.path().join("waterlevel-20240401.csv"), &[]);

    run_batch(input.path(), output.path(), &small_opts(), true).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.path().join("file-list.json")).unwrap())
            .unwrap();
    assert_eq!(
        manifest["2024"]["03"],
        serde_json::json!(["waterlevel-20240301.png", "waterlevel-20240316.png"])
    );
    assert_eq!(
        manifest["2023"]["11"],
        serde_json::json!(["waterlevel-20231105.png"])
    );
    assert!(manifest["2024"].get("04").is_none());
}
