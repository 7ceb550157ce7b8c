//! Reusable Dioxus RSX components for the GDP dashboard.

mod chart_header;
mod country_selector;
mod data_table;
mod error_display;
mod loading_spinner;
mod svg_chart;

pub use chart_header::ChartHeader;
pub use country_selector::CountrySelector;
pub use data_table::DataTable;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use svg_chart::SvgChart;
