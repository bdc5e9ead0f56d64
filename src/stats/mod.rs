//! Stats module - Descriptive statistics and report formatting

mod calculator;
pub mod report;

pub use calculator::{ColumnStats, StatsCalculator};
