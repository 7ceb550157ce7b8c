//! Dropdown selector for choosing a country.

use crate::state::AppState;
use dioxus::prelude::*;
use gdp_econ::Country;

/// Country dropdown selector.
/// Updates `selected_country` on change; disabled while a fetch is in flight.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_country)();
    let loading = state.view.read().loading();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        match Country::from_slug(&value) {
            Some(country) => state.selected_country.set(country),
            None => log::warn!("Ignoring unknown country selection '{}'", value),
        }
    };

    rsx! {
        div {
            label {
                r#for: "country-select",
                style: "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;",
                "Select Country"
            }
            select {
                id: "country-select",
                style: "padding: 8px; border-radius: 8px; border: 1px solid #d1d5db; background: white;",
                disabled: loading,
                onchange: on_change,
                for country in Country::ALL.iter() {
                    option {
                        value: "{country.slug()}",
                        selected: *country == selected,
                        "{country.label()}"
                    }
                }
            }
        }
    }
}
