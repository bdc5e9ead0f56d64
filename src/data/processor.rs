//! Data Processor Module
//! Validates the loaded table, then writes the curve plot and the statistics report
//! next to the source file.

use super::DataLoader;
use crate::charts::StressStrainRenderer;
use crate::error::{AnalysisError, Result};
use crate::stats::{report, StatsCalculator};
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const STRAIN_COLUMN: &str = "strain";
pub const STRESS_COLUMN: &str = "stress";

const PLOT_SUFFIX: &str = "_plot.png";
const RESULTS_SUFFIX: &str = "_results.txt";

/// Paths of the files written for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub plot_path: PathBuf,
    pub stats_path: PathBuf,
}

/// Derive the plot and statistics paths: extension stripped, suffix appended.
pub fn output_paths(source_path: &Path) -> AnalysisResult {
    AnalysisResult {
        plot_path: with_suffix(source_path, PLOT_SUFFIX),
        stats_path: with_suffix(source_path, RESULTS_SUFFIX),
    }
}

fn with_suffix(source_path: &Path, suffix: &str) -> PathBuf {
    let mut name = source_path.with_extension("").into_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Turns a loaded table into a plot image and a statistics report.
pub struct DataProcessor;

impl DataProcessor {
    /// Validate `df`, write `<base>_plot.png` and `<base>_results.txt`, and return both paths.
    ///
    /// Existing outputs are overwritten. Nothing is written when validation fails.
    pub fn process(df: &DataFrame, source_path: &Path) -> Result<AnalysisResult> {
        Self::validate(df)?;

        let outputs = output_paths(source_path);

        let points = Self::curve_points(df)?;
        StressStrainRenderer::render_png(&points, &outputs.plot_path)?;

        let stats = StatsCalculator::describe(df)?;
        let text = report::format_report(source_path, &stats);
        fs::write(&outputs.stats_path, text).map_err(|source| AnalysisError::Io {
            path: outputs.stats_path.clone(),
            source,
        })?;

        log::info!(
            "Analysis of {} written to {} and {}",
            source_path.display(),
            outputs.plot_path.display(),
            outputs.stats_path.display()
        );
        Ok(outputs)
    }

    /// Check that both required columns are present (exact, case-sensitive names).
    pub fn validate(df: &DataFrame) -> Result<()> {
        let names = DataLoader::column_names(df);
        let has = |wanted: &str| names.iter().any(|name| name == wanted);
        if has(STRAIN_COLUMN) && has(STRESS_COLUMN) {
            Ok(())
        } else {
            Err(AnalysisError::Validation)
        }
    }

    /// (strain, stress) pairs in row order, skipping rows where either value is missing.
    fn curve_points(df: &DataFrame) -> Result<Vec<(f64, f64)>> {
        let strain = df.column(STRAIN_COLUMN)?.cast(&DataType::Float64)?;
        let stress = df.column(STRESS_COLUMN)?.cast(&DataType::Float64)?;

        let points = strain
            .f64()?
            .into_iter()
            .zip(stress.f64()?.into_iter())
            .filter_map(|(x, y)| Some((x?, y?)))
            .collect();
        Ok(points)
    }
}
