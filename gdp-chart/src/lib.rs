//! SVG rendering of the GDP charts.
//!
//! Both charts are drawn with `plotters` into an in-memory SVG string, so
//! the CLI can write them to disk and the dashboard can inline them.

mod gdp_chart;
mod growth_chart;

pub use gdp_chart::render_gdp_chart;
pub use growth_chart::render_growth_chart;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::style::RGBColor;
use thiserror::Error;

/// Line colour of the GDP chart (#3b82f6).
pub const GDP_BLUE: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
/// Bar colour of the growth chart (#10b981).
pub const GROWTH_GREEN: RGBColor = RGBColor(0x10, 0xb9, 0x81);

#[derive(Error, Debug)]
pub enum RenderError {
    /// The series is empty, or no entry has a valid year and a plottable value.
    #[error("no plottable points in the series")]
    NothingToPlot,

    /// Values so large that the axis range is not a finite number.
    #[error("values too large to plot")]
    OutOfRange,

    #[error("chart drawing failed: {0}")]
    Drawing(String),
}

/// Pixel dimensions of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 420,
        }
    }
}

impl From<ChartSize> for (u32, u32) {
    fn from(size: ChartSize) -> Self {
        (size.width, size.height)
    }
}

fn draw_err<E>(e: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Drawing(e.to_string())
}

/// Reject an axis range whose bounds or span overflow.
fn finite_range(lo: f64, hi: f64) -> Result<std::ops::Range<f64>, RenderError> {
    if lo.is_finite() && hi.is_finite() && (hi - lo).is_finite() {
        Ok(lo..hi)
    } else {
        Err(RenderError::OutOfRange)
    }
}

/// Lowest and highest year among the plotted points.
fn year_bounds<T>(points: &[(i32, T)]) -> (i32, i32) {
    points
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), (year, _)| {
            (lo.min(*year), hi.max(*year))
        })
}
