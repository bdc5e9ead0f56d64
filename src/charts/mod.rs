//! Charts module - Static chart rendering

mod renderer;

pub use renderer::{StressStrainRenderer, CHART_TITLE, PLOT_HEIGHT, PLOT_WIDTH};
