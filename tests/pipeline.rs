use nitinol_extractor::{
    create_sample_csv, run_pipeline, AnalysisError, DataLoader, DataProcessor,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE: &str = "strain,stress\n0.01,100\n0.02,200\n0.03,300\n0.04,400\n0.05,500\n";

fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write input csv");
    path
}

/// Parse the value in `row` under `column` from a fixed-width statistics table.
fn table_value(report: &str, row: &str, column: &str) -> f64 {
    let lines: Vec<&str> = report.lines().collect();
    let header_idx = lines
        .iter()
        .position(|l| l.split_whitespace().any(|c| c == column))
        .expect("table header");
    let col_idx = lines[header_idx]
        .split_whitespace()
        .position(|c| c == column)
        .expect("column in header");

    let line = lines[header_idx..]
        .iter()
        .find(|l| l.split_whitespace().next() == Some(row))
        .expect("row in table");
    line.split_whitespace()
        .nth(col_idx + 1)
        .expect("value")
        .parse()
        .expect("numeric value")
}

#[test]
fn csv_round_trips_columns_and_values() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(dir.path(), "curve.csv", SAMPLE);

    let df = DataLoader::load(&input).unwrap();

    assert_eq!(DataLoader::column_names(&df), vec!["strain", "stress"]);
    assert_eq!(df.height(), 5);
    let stress: Vec<i64> = df
        .column("stress")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect();
    assert_eq!(stress, vec![100, 200, 300, 400, 500]);
}

#[test]
fn valid_table_writes_plot_and_report() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(dir.path(), "curve.csv", SAMPLE);

    let outputs = run_pipeline(&input).unwrap();

    assert_eq!(outputs.plot_path, dir.path().join("curve_plot.png"));
    assert_eq!(outputs.stats_path, dir.path().join("curve_results.txt"));
    assert!(fs::metadata(&outputs.plot_path).unwrap().len() > 0);
    assert!(fs::metadata(&outputs.stats_path).unwrap().len() > 0);

    let img = image::open(&outputs.plot_path).expect("plot is a decodable image");
    assert!(img.width() > 0 && img.height() > 0);

    let report = fs::read_to_string(&outputs.stats_path).unwrap();
    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("Strain-Stress Data Analysis"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some(format!("File: {}", input.display()).as_str()));
    assert!(report.contains("count  5.000000"));

    let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
    assert!(close(table_value(&report, "mean", "strain"), 0.03));
    assert!(close(table_value(&report, "mean", "stress"), 300.0));
    assert!(close(table_value(&report, "std", "stress"), 158.113883));
    assert!(close(table_value(&report, "min", "strain"), 0.01));
    assert!(close(table_value(&report, "25%", "stress"), 200.0));
    assert!(close(table_value(&report, "50%", "strain"), 0.03));
    assert!(close(table_value(&report, "75%", "stress"), 400.0));
    assert!(close(table_value(&report, "max", "stress"), 500.0));
}

#[test]
fn missing_columns_fail_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(dir.path(), "bad.csv", "strain,load\n0.01,100\n0.02,200\n");

    let err = run_pipeline(&input).unwrap_err();

    assert!(matches!(err, AnalysisError::Validation));
    assert_eq!(
        err.to_string(),
        "The file must contain \"strain\" and \"stress\" columns."
    );
    assert!(!dir.path().join("bad_plot.png").exists());
    assert!(!dir.path().join("bad_results.txt").exists());
}

#[test]
fn extra_numeric_columns_are_summarised_but_strings_are_not() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        dir.path(),
        "mixed.csv",
        "specimen,strain,stress,temperature\nA,0.01,100,20\nA,0.02,200,22\nB,0.03,300,24\n",
    );

    let outputs = run_pipeline(&input).unwrap();
    let report = fs::read_to_string(&outputs.stats_path).unwrap();

    assert!(close_enough(table_value(&report, "mean", "temperature"), 22.0));
    assert!(!report.contains("specimen"));
}

fn close_enough(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn rerunning_overwrites_with_identical_content() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(dir.path(), "repeat.csv", SAMPLE);

    let df = DataLoader::load(&input).unwrap();
    let first = DataProcessor::process(&df, &input).unwrap();
    let plot_a = fs::read(&first.plot_path).unwrap();
    let stats_a = fs::read(&first.stats_path).unwrap();

    let second = DataProcessor::process(&df, &input).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second.plot_path).unwrap(), plot_a);
    assert_eq!(fs::read(&second.stats_path).unwrap(), stats_a);
}

#[test]
fn unreadable_input_is_a_format_error() {
    let dir = TempDir::new().unwrap();

    let missing = run_pipeline(&dir.path().join("nowhere.csv")).unwrap_err();
    assert!(matches!(missing, AnalysisError::FileFormat { .. }));

    let corrupt = write_csv(dir.path(), "sheet.xlsx", "not a workbook");
    let err = run_pipeline(&corrupt).unwrap_err();
    assert!(matches!(err, AnalysisError::FileFormat { .. }));
}

#[test]
fn seeded_sample_feeds_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let sample = create_sample_csv(Some(&dir.path().join("strain_stress_data.csv"))).unwrap();

    let outputs = run_pipeline(&sample).unwrap();
    assert_eq!(
        outputs.stats_path,
        dir.path().join("strain_stress_data_results.txt")
    );
}

#[test]
fn extreme_magnitudes_still_produce_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(dir.path(), "extreme.csv", "strain,stress\n-1e308,1\n1e308,2\n");

    let outputs = run_pipeline(&input).unwrap();

    let img = image::open(&outputs.plot_path).expect("plot is a decodable image");
    assert_eq!((img.width(), img.height()), (640, 480));
    let report = fs::read_to_string(&outputs.stats_path).unwrap();
    assert!(close_enough(table_value(&report, "mean", "stress"), 1.5));
}
