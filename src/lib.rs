//! Nitinol Extractor - stress-strain analysis pipeline
//!
//! Loads a CSV or spreadsheet, checks for `strain` and `stress` columns, and writes
//! a curve plot plus a descriptive-statistics report beside the input file.

pub mod charts;
pub mod data;
pub mod error;
pub mod stats;

pub use data::{create_sample_csv, AnalysisResult, DataLoader, DataProcessor};
pub use error::{AnalysisError, Result};

use std::path::Path;

/// Load `path` and process it in one step.
pub fn run_pipeline(path: &Path) -> Result<AnalysisResult> {
    let df = DataLoader::load(path)?;
    DataProcessor::process(&df, path)
}
