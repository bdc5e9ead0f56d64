//! Sample Data Module
//! Seeds a small stress-strain CSV so the application has something to open.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// File written when no explicit path is given.
pub const SAMPLE_CSV_FILE: &str = "strain_stress_data.csv";

pub const SAMPLE_STRAIN: [f64; 5] = [0.01, 0.02, 0.03, 0.04, 0.05];
pub const SAMPLE_STRESS: [i64; 5] = [100, 200, 300, 400, 500];

/// Write the fixed five-row sample table and return the path written.
pub fn create_sample_csv(path: Option<&Path>) -> Result<PathBuf> {
    let path = sample_path(path);

    let mut df = df!(
        "strain" => SAMPLE_STRAIN,
        "stress" => SAMPLE_STRESS
    )?;

    let mut file = File::create(&path).map_err(|source| AnalysisError::Io {
        path: path.clone(),
        source,
    })?;
    CsvWriter::new(&mut file).finish(&mut df)?;

    log::info!("CSV file created successfully at {}.", path.display());
    Ok(path)
}

fn sample_path(path: Option<&Path>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(SAMPLE_CSV_FILE), Path::to_path_buf)
}
