//! Error Types
//! Failures surfaced by the load → validate → compute → persist pipeline.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown when the required columns are missing.
pub const MISSING_COLUMNS_MESSAGE: &str = "The file must contain \"strain\" and \"stress\" columns.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to load {}: {reason}", path.display())]
    FileFormat { path: PathBuf, reason: String },
    #[error("{}", MISSING_COLUMNS_MESSAGE)]
    Validation,
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render plot: {0}")]
    Render(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl AnalysisError {
    pub(crate) fn file_format(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FileFormat {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
