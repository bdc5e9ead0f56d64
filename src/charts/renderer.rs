//! Static Chart Renderer
//! Draws the stress-strain curve to a PNG with plotters.
//!
//! Layout: title on top, strain on the x axis, stress on the y axis,
//! one line series with a legend entry in the upper-left corner.

use crate::error::{AnalysisError, Result};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use std::error::Error;
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

pub const PLOT_WIDTH: u32 = 640;
pub const PLOT_HEIGHT: u32 = 480;

pub const CHART_TITLE: &str = "Stress-Strain Curve";
const SERIES_LABEL: &str = "Stress-Strain Curve";
const X_LABEL: &str = "Strain";
const Y_LABEL: &str = "Stress";

const FONT_FAMILY: &str = "sans-serif";
const CHART_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Largest axis magnitude handed to plotters; keeps every span and tick step finite.
const AXIS_LIMIT: f64 = f64::MAX / 8.0;

fn clamp_axis(v: f64) -> f64 {
    v.clamp(-AXIS_LIMIT, AXIS_LIMIT)
}

pub struct StressStrainRenderer;

impl StressStrainRenderer {
    /// Render the curve through `points` (strain, stress) to `output_path`, replacing any existing file.
    pub fn render_png(points: &[(f64, f64)], output_path: &Path) -> Result<()> {
        Self::ensure_font()?;
        Self::draw(points, output_path).map_err(|e| AnalysisError::Render(e.to_string()))
    }

    /// Register the bundled chart font with plotters (once per process).
    fn ensure_font() -> Result<()> {
        static REGISTERED: OnceLock<bool> = OnceLock::new();
        let registered = *REGISTERED
            .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, CHART_FONT).is_ok());
        if registered {
            Ok(())
        } else {
            Err(AnalysisError::Render("bundled chart font could not be loaded".to_string()))
        }
    }

    fn draw(points: &[(f64, f64)], output_path: &Path) -> std::result::Result<(), Box<dyn Error>> {
        let (x_range, y_range) = Self::get_ranges(points);

        let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, (FONT_FAMILY, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|&(x, y)| (clamp_axis(x), clamp_axis(y))),
                LINE_COLOR.stroke_width(2),
            ))?
            .label(SERIES_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Axis ranges covering all points with a small margin; degenerate spans are widened.
    fn get_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
        let xs = points.iter().map(|p| p.0);
        let ys = points.iter().map(|p| p.1);
        (Self::padded_range(xs), Self::padded_range(ys))
    }

    /// Finite, non-empty range around the finite values, 5% padding on each side.
    fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_infinite() {
            return 0.0..1.0;
        }

        let (min, max) = (clamp_axis(min), clamp_axis(max));

        // halves first so the difference cannot overflow
        let half_span = max / 2.0 - min / 2.0;
        let pad = if half_span > 0.0 {
            half_span * 0.1
        } else if min == 0.0 {
            1.0
        } else {
            min.abs() * 0.05
        };

        let (start, end) = (min - pad, max + pad);
        if start < end {
            start..end
        } else {
            (min - 1.0)..(max + 1.0)
        }
    }
}
