//! Write the GDP line chart and growth bar chart of each country to disk.

use crate::query::summary_line;
use crate::SourceArgs;
use anyhow::Context;
use gdp_chart::{render_gdp_chart, render_growth_chart, ChartSize};
use gdp_data::{normalize, NormalizedSeries};
use gdp_econ::client::SeriesSource;
use gdp_econ::Country;
use gdp_utils::dates::ZonePolicy;
use log::{error, info};
use std::path::{Path, PathBuf};

/// Fetch and plot each country in turn.
///
/// A failing country is logged and skipped; the command still fails at the
/// end if any country could not be plotted.
pub async fn run_plot(
    source: &SourceArgs,
    countries: &[Country],
    out_dir: &Path,
) -> anyhow::Result<()> {
    let client = source.client()?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut failed: Vec<Country> = Vec::new();
    for &country in countries {
        info!("Plotting GDP for {}", country.label());
        match plot_country(&client, country, source.zone, out_dir).await {
            Ok(paths) => {
                for path in paths {
                    info!("  wrote {}", path.display());
                }
            }
            Err(e) => {
                error!("Failed to plot {}: {:#}", country.label(), e);
                failed.push(country);
            }
        }
    }

    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|c| c.label()).collect();
        anyhow::bail!("could not plot {}", names.join(", "));
    }
    info!("Plot complete. Output: {}", out_dir.display());
    Ok(())
}

async fn plot_country(
    client: &impl SeriesSource,
    country: Country,
    zone: ZonePolicy,
    out_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let records = client.fetch_series(country.slug()).await?;
    let series = normalize(&records, zone);
    write_charts(country, &series, out_dir)
}

/// `{stem}_gdp_analysis.svg` and `{stem}_gdp_growth.svg` inside `out_dir`.
pub fn chart_paths(country: Country, out_dir: &Path) -> (PathBuf, PathBuf) {
    let stem = country.file_stem();
    (
        out_dir.join(format!("{}_gdp_analysis.svg", stem)),
        out_dir.join(format!("{}_gdp_growth.svg", stem)),
    )
}

/// Render both charts for a normalized series and write them.
pub fn write_charts(
    country: Country,
    series: &NormalizedSeries,
    out_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let (gdp_path, growth_path) = chart_paths(country, out_dir);

    let gdp_svg = render_gdp_chart(country, series, ChartSize::default())
        .with_context(|| format!("drawing GDP chart for {}", country.label()))?;
    let growth_svg = render_growth_chart(series, ChartSize::default())
        .with_context(|| format!("drawing growth chart for {}", country.label()))?;

    std::fs::write(&gdp_path, gdp_svg)
        .with_context(|| format!("writing {}", gdp_path.display()))?;
    std::fs::write(&growth_path, growth_svg)
        .with_context(|| format!("writing {}", growth_path.display()))?;

    if let Some(last) = series.get(series.len().saturating_sub(1)) {
        info!(
            "  latest {}",
            summary_line(last.year, last.value, last.growth_rate)
        );
    }
    Ok(vec![gdp_path, growth_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdp_econ::RawObservation;

    #[test]
    fn test_chart_paths_use_file_stem() {
        let (gdp, growth) = chart_paths(Country::NewZealand, Path::new("out"));
        assert_eq!(gdp, Path::new("out/new_zealand_gdp_analysis.svg"));
        assert_eq!(growth, Path::new("out/new_zealand_gdp_growth.svg"));
    }

    #[test]
    fn test_write_charts() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            RawObservation::new(Some("Sweden"), "1960-12-31T00:00:00", 15.8),
            RawObservation::new(Some("Sweden"), "1961-12-31T00:00:00", 17.4),
        ];
        let series = normalize(&records, ZonePolicy::Utc);

        let paths = write_charts(Country::Sweden, &series, dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            let svg = std::fs::read_to_string(path).unwrap();
            assert!(svg.starts_with("<svg"));
        }
        assert!(dir.path().join("sweden_gdp_analysis.svg").exists());
    }

    #[test]
    fn test_empty_series_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_charts(Country::Thailand, &NormalizedSeries::default(), dir.path());
        assert!(result.is_err());
        assert!(!dir.path().join("thailand_gdp_analysis.svg").exists());
    }

    #[tokio::test]
    async fn test_run_plot_without_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceArgs {
            api_key: None,
            base_url: gdp_econ::client::DEFAULT_BASE_URL.to_string(),
            zone: ZonePolicy::Utc,
        };
        let result = run_plot(&source, &[Country::Mexico], dir.path()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_plot_continues_past_failures() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/historical/country/sweden/indicator/gdp"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/historical/country/thailand/indicator/gdp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"Country":"Thailand","DateTime":"1996-12-31T00:00:00","Value":183.0},
                    {"Country":"Thailand","DateTime":"1997-12-31T00:00:00","Value":150.0}]"#,
            ))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let source = SourceArgs {
            api_key: Some("guest:guest".to_string()),
            base_url: server.uri(),
            zone: ZonePolicy::Utc,
        };
        let result = run_plot(&source, &[Country::Sweden, Country::Thailand], dir.path()).await;

        let message = result.unwrap_err().to_string();
        assert_eq!(message, "could not plot Sweden");
        assert!(dir.path().join("thailand_gdp_analysis.svg").exists());
        assert!(dir.path().join("thailand_gdp_growth.svg").exists());
        assert!(!dir.path().join("sweden_gdp_analysis.svg").exists());
    }
}
