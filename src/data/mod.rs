//! Data module - Table loading, processing and sample data

mod loader;
mod processor;
mod sample;

pub use loader::DataLoader;
pub use processor::{output_paths, AnalysisResult, DataProcessor};
pub use sample::{create_sample_csv, SAMPLE_CSV_FILE};
