//! GUI module - User interface components

mod app;
mod plot_viewer;

pub use app::ExtractorApp;
pub use plot_viewer::PlotViewer;
