//! Statistics Calculator Module
//! Descriptive statistics for the numeric columns of a table.

use crate::data::DataLoader;
use polars::prelude::*;
use rayon::prelude::*;
use statrs::statistics::Statistics;

/// Summary of a single numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Values in report row order: count, mean, std, min, 25%, 50%, 75%, max.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// NaN values are skipped. Undefined results (empty input, std of one value) are NaN.
    pub fn compute_descriptive_stats(name: &str, values: &[f64]) -> ColumnStats {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        ColumnStats {
            name: name.to_string(),
            count: sorted.len(),
            mean: sorted.iter().mean(),
            std: sorted.iter().std_dev(),
            min: Statistics::min(sorted.iter()),
            q25: Self::percentile(&sorted, 25.0),
            q50: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: Statistics::max(sorted.iter()),
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Get the non-null values of a column as f64.
    pub fn column_values(column: &Column) -> PolarsResult<Vec<f64>> {
        let as_f64 = column.cast(&DataType::Float64)?;
        Ok(as_f64.f64()?.into_iter().flatten().collect())
    }

    /// Compute statistics for every numeric column, in table order.
    pub fn describe(df: &DataFrame) -> PolarsResult<Vec<ColumnStats>> {
        let numeric = DataLoader::numeric_columns(df)
            .iter()
            .map(|name| df.column(name))
            .collect::<PolarsResult<Vec<&Column>>>()?;

        log::debug!("Summarising {} numeric columns", numeric.len());

        // rayon keeps the input order when collecting
        numeric
            .par_iter()
            .map(|col| -> PolarsResult<ColumnStats> {
                let values = Self::column_values(col)?;
                Ok(Self::compute_descriptive_stats(col.name(), &values))
            })
            .collect()
    }
}
