//! Text the charts and the data table show for a series.
//!
//! Rounding happens only here; the series itself keeps full precision.

use crate::series::NormalizedSeries;
use gdp_econ::Country;
use gdp_utils::numbers::to_fixed;
use serde::Serialize;

/// Year span shown when the series has no valid year to derive one from.
pub const DEFAULT_YEAR_SPAN: (i32, i32) = (1960, 2023);

pub const GROWTH_CHART_TITLE: &str = "Yearly GDP Growth Rate (%)";
pub const GDP_AXIS_LABEL: &str = "GDP (USD, log scale)";
pub const GROWTH_AXIS_LABEL: &str = "Growth Rate (%)";
pub const GDP_LEGEND: &str = "GDP (USD)";
pub const GROWTH_LEGEND: &str = "Yearly Growth Rate (%)";

/// Every n-th point gets a value label on the charts.
pub const ANNOTATION_STEP: usize = 5;

/// One rendered row of the GDP data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub year: String,
    /// e.g. "1234.50B"
    pub value: String,
    /// e.g. "12.35%"
    pub growth: String,
    /// Growth is shown green when true, red otherwise.
    pub growth_positive: bool,
    /// Alternating background for odd rows.
    pub shaded: bool,
}

/// "NaN" stands in for a year that could not be parsed.
pub fn format_year(year: Option<i32>) -> String {
    match year {
        Some(y) => y.to_string(),
        None => "NaN".to_string(),
    }
}

pub fn format_value(value: f64) -> String {
    format!("{}B", to_fixed(value, 2))
}

pub fn format_growth(growth_rate: f64) -> String {
    format!("{}%", to_fixed(growth_rate, 2))
}

/// `NaN` compares false, so it is classed as negative.
pub fn is_positive_growth(growth_rate: f64) -> bool {
    growth_rate >= 0.0
}

pub fn table_rows(series: &NormalizedSeries) -> Vec<TableRow> {
    series
        .points()
        .enumerate()
        .map(|(index, point)| TableRow {
            year: format_year(point.year),
            value: format_value(point.value),
            growth: format_growth(point.growth_rate),
            growth_positive: is_positive_growth(point.growth_rate),
            shaded: index % 2 == 1,
        })
        .collect()
}

/// "1960-2023", from the series when it has valid years.
pub fn year_span_label(series: &NormalizedSeries) -> String {
    let (first, last) = series.year_span().unwrap_or(DEFAULT_YEAR_SPAN);
    format!("{}-{}", first, last)
}

pub fn subtitle(country: Country, series: &NormalizedSeries) -> String {
    format!(
        "Visualizing GDP trends and growth rates from {} for {}",
        year_span_label(series),
        country.label()
    )
}

pub fn gdp_chart_title(country: Country, series: &NormalizedSeries) -> String {
    format!(
        "{} GDP Growth ({}) - Logarithmic Scale",
        country.label(),
        year_span_label(series)
    )
}

/// Indices that carry a point label: 0, 5, 10, ...
pub fn annotation_indices(len: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(ANNOTATION_STEP)
}

/// One-decimal value label, e.g. "15.8B".
pub fn value_annotation(value: f64) -> String {
    format!("{}B", to_fixed(value, 1))
}

/// One-decimal growth label, e.g. "-3.2%".
pub fn growth_annotation(growth_rate: f64) -> String {
    format!("{}%", to_fixed(growth_rate, 1))
}
