//! Fetch one country's series and print it as a table, CSV or JSON.

use crate::SourceArgs;
use anyhow::Context;
use clap::ValueEnum;
use gdp_data::display::{format_growth, format_value, format_year, table_rows};
use gdp_data::{normalize, NormalizedSeries};
use gdp_econ::client::SeriesSource;
use gdp_econ::Country;
use log::info;
use serde::Serialize;
use std::path::Path;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns, as shown in the dashboard table
    #[default]
    Table,
    /// `year,gdp_billions_usd,growth_rate_pct` with a header row
    Csv,
    /// Pretty-printed object with the country and its points
    Json,
}

/// Unrounded row used for the machine-readable formats.
#[derive(Debug, Serialize)]
struct SeriesRow {
    year: Option<i32>,
    gdp_billions_usd: f64,
    growth_rate_pct: f64,
}

#[derive(Debug, Serialize)]
struct SeriesDocument {
    country: &'static str,
    label: &'static str,
    points: Vec<SeriesRow>,
}

fn rows(series: &NormalizedSeries) -> Vec<SeriesRow> {
    series
        .points()
        .map(|p| SeriesRow {
            year: p.year,
            gdp_billions_usd: p.value,
            growth_rate_pct: p.growth_rate,
        })
        .collect()
}

pub async fn run_query(
    source: &SourceArgs,
    country: Country,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let client = source.client()?;
    info!("Querying GDP for {} from {}", country.slug(), client.base_url());

    let records = client
        .fetch_series(country.slug())
        .await
        .with_context(|| format!("fetching GDP for {}", country.label()))?;
    let series = normalize(&records, source.zone);
    info!(
        "{} of {} records kept for {}",
        series.len(),
        records.len(),
        country.slug()
    );

    let rendered = render(country, &series, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Query complete. Output: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

pub fn render(
    country: Country,
    series: &NormalizedSeries,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(series)),
        OutputFormat::Csv => render_csv(series),
        OutputFormat::Json => render_json(country, series),
    }
}

fn render_table(series: &NormalizedSeries) -> String {
    let mut out = format!("{:>6}  {:>16}  {:>16}\n", "Year", "GDP (USD)", "Growth Rate (%)");
    for row in table_rows(series) {
        out.push_str(&format!(
            "{:>6}  {:>16}  {:>16}\n",
            row.year, row.value, row.growth
        ));
    }
    out
}

fn render_csv(series: &NormalizedSeries) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows(series) {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().context("flushing CSV output")?;
    // An empty series still gets its header row
    if bytes.is_empty() {
        return Ok("year,gdp_billions_usd,growth_rate_pct\n".to_string());
    }
    Ok(String::from_utf8(bytes)?)
}

/// Non-finite numbers become `null`, as JSON has no NaN.
fn render_json(country: Country, series: &NormalizedSeries) -> anyhow::Result<String> {
    let document = SeriesDocument {
        country: country.slug(),
        label: country.label(),
        points: rows(series),
    };
    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}

/// Same text the dashboard table shows, one line per point.
pub fn summary_line(year: Option<i32>, value: f64, growth_rate: f64) -> String {
    format!(
        "{}: {} ({})",
        format_year(year),
        format_value(value),
        format_growth(growth_rate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdp_econ::RawObservation;
    use gdp_utils::dates::ZonePolicy;

    fn sample() -> NormalizedSeries {
        let records = vec![
            RawObservation::new(Some("Mexico"), "1961-12-31T00:00:00", 15.0),
            RawObservation::new(Some("Mexico"), "1960-12-31T00:00:00", 10.0),
            RawObservation::new(Some("Mexico"), "garbage", 20.0),
        ];
        normalize(&records, ZonePolicy::Utc)
    }

    #[test]
    fn test_table_output() {
        let out = render(Country::Mexico, &sample(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Growth Rate (%)"));
        assert!(lines[1].contains("1960") && lines[1].contains("10.00B"));
        assert!(lines[2].contains("50.00%"));
        assert!(lines[3].contains("NaN"));
    }

    #[test]
    fn test_csv_output() {
        let out = render(Country::Mexico, &sample(), OutputFormat::Csv).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("year,gdp_billions_usd,growth_rate_pct"));
        assert_eq!(lines.next(), Some("1960,10.0,0.0"));
        assert_eq!(lines.next(), Some("1961,15.0,50.0"));
        // Unparseable timestamp: no year, sorted last
        assert!(lines.next().unwrap().starts_with(",20.0,33.333"));
    }

    #[test]
    fn test_csv_output_for_empty_series() {
        let out = render(Country::Sweden, &NormalizedSeries::default(), OutputFormat::Csv).unwrap();
        assert_eq!(out, "year,gdp_billions_usd,growth_rate_pct\n");
    }

    #[test]
    fn test_json_output() {
        let out = render(Country::NewZealand, &sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["country"], "new zealand");
        assert_eq!(value["label"], "New Zealand");
        assert_eq!(value["points"].as_array().unwrap().len(), 3);
        assert_eq!(value["points"][1]["growth_rate_pct"], 50.0);
        assert!(value["points"][2]["year"].is_null());
    }

    #[test]
    fn test_json_nan_becomes_null() {
        let records = vec![RawObservation::new(Some("Thailand"), "2000-12-31", f64::NAN)];
        let series = normalize(&records, ZonePolicy::Utc);
        let out = render(Country::Thailand, &series, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["points"][0]["gdp_billions_usd"].is_null());
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(Some(2020), 1090.5, -8.24), "2020: 1090.50B (-8.24%)");
        assert_eq!(summary_line(None, f64::NAN, f64::NAN), "NaN: NaNB (NaN%)");
    }
}
