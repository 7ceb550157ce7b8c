//! GDP Growth Analysis
//!
//! Fetches the historical GDP series for the selected country from the
//! Trading Economics API and shows it as a logarithmic GDP line chart, a
//! yearly growth-rate bar chart and a data table.
//!
//! Data flow:
//! 1. `API_KEY` is captured at build time and handed to the client.
//! 2. Changing the dropdown starts a fetch tagged with a new generation.
//! 3. When the fetch resolves, `SeriesView::complete` normalizes the records,
//!    unless a newer selection has been made in the meantime.
//! 4. The series is rendered to SVG by `gdp-chart` and inlined.

use dioxus::prelude::*;
use gdp_chart::{render_gdp_chart, render_growth_chart, ChartSize};
use gdp_chart_ui::components::{
    ChartHeader, CountrySelector, DataTable, ErrorDisplay, LoadingSpinner, SvgChart,
};
use gdp_chart_ui::state::AppState;
use gdp_data::display::{gdp_chart_title, subtitle, table_rows, TableRow, GROWTH_CHART_TITLE};
use gdp_data::Completion;
use gdp_econ::client::{SeriesSource, TradingEconomicsClient};
use gdp_econ::{ApiKey, FetchError};

/// Credential baked in at build time.
const API_KEY: Option<&str> = option_env!("API_KEY");

/// Chart container DOM element IDs.
const GDP_CHART_ID: &str = "gdp-chart";
const GROWTH_CHART_ID: &str = "growth-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gdp-dashboard-root"))
        .launch(App);
}

fn build_client() -> Result<TradingEconomicsClient, String> {
    let key = API_KEY.ok_or(FetchError::MissingApiKey(ApiKey::ENV_VAR));
    key.and_then(ApiKey::new)
        .map(TradingEconomicsClient::new)
        .map_err(|e| e.to_string())
}

/// Everything derived from the current series for rendering.
#[derive(Clone, PartialEq)]
struct Rendered {
    gdp_svg: Option<String>,
    growth_svg: Option<String>,
    rows: Vec<TableRow>,
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(build_client);

    // Fetch whenever the selection changes
    use_effect(move || {
        let country = (state.selected_country)();
        let client = match &client {
            Ok(client) => client.clone(),
            Err(msg) => {
                log::error!("Cannot fetch GDP data: {}", msg);
                state.view.write().fail(msg.clone());
                return;
            }
        };

        let ticket = state.view.write().begin(country);
        log::info!("Fetch #{} for {}", ticket.generation, country.slug());
        spawn(async move {
            let result = client.fetch_series(country.slug()).await;
            if state.view.write().complete(ticket, result) == Completion::Stale {
                log::info!(
                    "Discarded superseded result for {} (fetch #{})",
                    country.slug(),
                    ticket.generation
                );
            }
        });
    });

    // Loading and error changes stop here; dependents only rerun when the
    // country or the series actually differ
    let displayed = use_memo(move || {
        let view = state.view.read();
        (view.country(), view.series().clone())
    });

    let rendered = use_memo(move || {
        let displayed = displayed.read();
        let (country, series) = &*displayed;
        if series.is_empty() {
            return Rendered {
                gdp_svg: None,
                growth_svg: None,
                rows: Vec::new(),
            };
        }
        let gdp_svg = render_gdp_chart(*country, series, ChartSize::default())
            .map_err(|e| log::warn!("GDP chart not drawn: {}", e))
            .ok();
        let growth_svg = render_growth_chart(series, ChartSize::default())
            .map_err(|e| log::warn!("Growth chart not drawn: {}", e))
            .ok();
        Rendered {
            gdp_svg,
            growth_svg,
            rows: table_rows(series),
        }
    });

    let view = state.view.read();
    let country = view.country();
    let loading = view.loading();
    let error = view.error().map(str::to_string);
    let has_data = !view.series().is_empty();
    let header_subtitle = subtitle(country, view.series());
    let gdp_title = gdp_chart_title(country, view.series());
    drop(view);
    let Rendered {
        gdp_svg,
        growth_svg,
        rows,
    } = rendered();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 24px; background: linear-gradient(to bottom right, #f9fafb, #f3f4f6); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            div {
                style: "max-width: 1280px; margin: 0 auto;",

                header {
                    style: "margin-bottom: 32px;",
                    h1 {
                        style: "font-size: 30px; font-weight: 700; color: #1f2937; margin: 0;",
                        "GDP Growth Analysis"
                    }
                    p {
                        style: "color: #4b5563; margin-top: 8px;",
                        "{header_subtitle}"
                    }
                }

                div {
                    style: "background: white; border-radius: 12px; box-shadow: 0 10px 15px rgba(0,0,0,0.1); padding: 24px; margin-bottom: 32px;",
                    div {
                        style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px; margin-bottom: 24px;",
                        CountrySelector {}
                        div {
                            if loading {
                                LoadingSpinner {}
                            }
                            if let Some(message) = error {
                                ErrorDisplay { message }
                            }
                        }
                    }

                    if has_data {
                        div {
                            style: "display: grid; grid-template-columns: 1fr; gap: 32px;",
                            div {
                                style: "background: #f9fafb; border-radius: 8px; padding: 16px;",
                                ChartHeader {
                                    title: gdp_title,
                                    unit_description: "Billions of USD, logarithmic scale".to_string(),
                                }
                                if let Some(svg) = gdp_svg {
                                    SvgChart { id: GDP_CHART_ID.to_string(), svg, min_height: 420 }
                                }
                            }
                            div {
                                style: "background: #f9fafb; border-radius: 8px; padding: 16px;",
                                ChartHeader {
                                    title: GROWTH_CHART_TITLE.to_string(),
                                    unit_description: "Percent change from the previous year".to_string(),
                                }
                                if let Some(svg) = growth_svg {
                                    SvgChart { id: GROWTH_CHART_ID.to_string(), svg, min_height: 420 }
                                }
                            }
                        }
                    }
                }

                if has_data {
                    div {
                        style: "background: white; border-radius: 12px; box-shadow: 0 10px 15px rgba(0,0,0,0.1); padding: 24px;",
                        ChartHeader { title: "GDP Data Table".to_string() }
                        DataTable { rows }
                    }
                }

                footer {
                    style: "margin-top: 48px; text-align: center; font-size: 14px; color: #6b7280;",
                    p { "Data provided by Trading Economics API" }
                }
            }
        }
    }
}
