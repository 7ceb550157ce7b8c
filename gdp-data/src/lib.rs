//! Data processing for GDP observations.
//!
//! This crate turns the raw records returned by the data source into the
//! ordered `(year, value, growth rate)` series the charts and table consume,
//! and holds the display model that decides which fetch result is shown.

pub mod display;
pub mod refresh;
pub mod series;

pub use refresh::{Completion, FetchGenerations, FetchTicket, SeriesView};
pub use series::{growth_rates, normalize, NormalizedSeries, SeriesPoint};
