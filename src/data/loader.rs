//! Data Loader Module
//! Reads CSV files with Polars and spreadsheets with calamine into a DataFrame.

use crate::error::{AnalysisError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::*;
use std::path::Path;

/// Loads tabular input files into a Polars DataFrame.
pub struct DataLoader;

impl DataLoader {
    /// Load a `.csv` file as delimited text, anything else as a spreadsheet (first sheet).
    pub fn load(path: &Path) -> Result<DataFrame> {
        let is_csv = path.extension().is_some_and(|ext| ext == "csv");
        let df = if is_csv {
            Self::load_csv(path)?
        } else {
            Self::load_spreadsheet(path)?
        };

        log::debug!(
            "Loaded {} ({} rows, {} columns)",
            path.display(),
            df.height(),
            df.width()
        );
        Ok(df)
    }

    fn load_csv(path: &Path) -> Result<DataFrame> {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|e| AnalysisError::file_format(path, e))
    }

    fn load_spreadsheet(path: &Path) -> Result<DataFrame> {
        let mut workbook = open_workbook_auto(path).map_err(|e| AnalysisError::file_format(path, e))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AnalysisError::file_format(path, "workbook contains no sheets"))?
            .map_err(|e| AnalysisError::file_format(path, e))?;

        if range.is_empty() {
            return Err(AnalysisError::file_format(path, "first sheet is empty"));
        }

        frame_from_cells(range.rows()).map_err(|e| AnalysisError::file_format(path, e))
    }

    /// Get list of column names.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get list of numeric column names, in table order.
    pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
        df.get_columns()
            .iter()
            .filter(|col| is_numeric(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Build a DataFrame from spreadsheet rows, treating the first row as the header.
///
/// A column whose non-empty cells are all numbers becomes `Float64` (empty cells
/// are nulls); any other column is kept as strings.
fn frame_from_cells<'a>(mut rows: impl Iterator<Item = &'a [Data]>) -> PolarsResult<DataFrame> {
    let header: Vec<String> = match rows.next() {
        Some(cells) => cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| match cell_text(cell) {
                Some(name) if !name.trim().is_empty() => name,
                _ => format!("column_{idx}"),
            })
            .collect(),
        None => Vec::new(),
    };
    let body: Vec<&[Data]> = rows.collect();

    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<Option<&Data>> = body
                .iter()
                .map(|row| row.get(idx).filter(|cell| !matches!(cell, Data::Empty)))
                .collect();

            let all_numeric = cells
                .iter()
                .flatten()
                .all(|cell| matches!(cell, Data::Int(_) | Data::Float(_)));

            if all_numeric {
                let values: Vec<Option<f64>> = cells
                    .iter()
                    .map(|cell| cell.and_then(cell_number))
                    .collect();
                Column::new(name.as_str().into(), values)
            } else {
                let values: Vec<Option<String>> = cells
                    .iter()
                    .map(|cell| cell.and_then(cell_text))
                    .collect();
                Column::new(name.as_str().into(), values)
            }
        })
        .collect();

    DataFrame::new(columns)
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::Error(e) => Some(format!("{e:?}")),
    }
}
