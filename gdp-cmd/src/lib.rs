//! Command implementations for the GDP CLI.
//!
//! Provides subcommands for listing the supported countries, querying a
//! normalized GDP series and writing the two charts as SVG files.

use anyhow::Context;
use clap::{Args, Subcommand};
use gdp_econ::client::{TradingEconomicsClient, DEFAULT_BASE_URL};
use gdp_econ::{ApiKey, Country, FetchError};
use gdp_utils::dates::ZonePolicy;
use std::path::PathBuf;
use std::time::Duration;

pub mod plot;
pub mod query;

use query::OutputFormat;

/// Where the data comes from and how its timestamps are read.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Trading Economics API key
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// API host
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Time zone used to read date-times without an offset
    #[arg(long, default_value_t = ZonePolicy::Utc, global = true)]
    pub zone: ZonePolicy,
}

impl SourceArgs {
    /// Build the API client; fails when no key was given.
    pub fn client(&self) -> anyhow::Result<TradingEconomicsClient> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey(ApiKey::ENV_VAR))
            .and_then(ApiKey::new)
            .context("pass --api-key or set API_KEY")?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(TradingEconomicsClient::builder(key)
            .with_base_url(self.base_url.as_str())
            .with_http_client(http)
            .build())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the supported countries
    Countries,

    /// Fetch and print the normalized GDP series of one country
    Query {
        /// Country slug, e.g. "sweden" or "new zealand"
        #[arg(short, long)]
        country: Country,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the GDP line chart and the growth bar chart as SVG files
    Plot {
        /// Country slug
        #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
        country: Option<Country>,

        /// Plot every supported country
        #[arg(long)]
        all: bool,

        /// Directory the SVG files are written to
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
    },
}

pub async fn run(source: SourceArgs, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Countries => {
            print!("{}", countries_listing());
            Ok(())
        }
        Command::Query {
            country,
            format,
            output,
        } => query::run_query(&source, country, format, output.as_deref()).await,
        Command::Plot {
            country,
            all,
            out_dir,
        } => {
            let countries = match country {
                Some(country) if !all => vec![country],
                _ => Country::ALL.to_vec(),
            };
            plot::run_plot(&source, &countries, &out_dir).await
        }
    }
}

/// One `slug<TAB>label` line per supported country.
pub fn countries_listing() -> String {
    Country::ALL
        .iter()
        .map(|c| format!("{}\t{}\n", c.slug(), c.label()))
        .collect()
}
