//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gdp_data::SeriesView;
use gdp_econ::Country;
use gdp_utils::dates::ZonePolicy;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Country chosen in the dropdown; changing it triggers a fetch
    pub selected_country: Signal<Country>,
    /// Displayed series, loading flag and error message
    pub view: Signal<SeriesView>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let country = Country::default();
        Self {
            selected_country: Signal::new(country),
            view: Signal::new(SeriesView::new(country, ZonePolicy::Utc)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
