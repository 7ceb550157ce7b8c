//! HTTP adapter for the Trading Economics historical GDP endpoint.
//!
//! One GET per call; no retry, no caching. Works natively and in the
//! browser (reqwest switches to `fetch` on wasm32).

use crate::config::ApiKey;
use crate::error::FetchError;
use crate::observation::RawObservation;
use log::{info, warn};
use reqwest::{Client, Url};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.tradingeconomics.com";

/// Anything that can produce the raw observations for a country slug.
///
/// Implemented by [`TradingEconomicsClient`]; tests and the dashboard can
/// substitute their own source.
#[allow(async_fn_in_trait)]
pub trait SeriesSource {
    async fn fetch_series(&self, country_slug: &str) -> Result<Vec<RawObservation>, FetchError>;
}

/// Builder used to configure a [`TradingEconomicsClient`].
#[derive(Debug, Clone)]
pub struct TradingEconomicsClientBuilder {
    api_key: ApiKey,
    base_url: Option<String>,
    http_client: Option<Client>,
}

impl TradingEconomicsClientBuilder {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: None,
            http_client: None,
        }
    }

    /// Point the client at another host (a mock server in tests).
    pub fn with_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a pre-configured reqwest client (timeouts, proxies).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> TradingEconomicsClient {
        TradingEconomicsClient {
            http: self.http_client.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| String::from(DEFAULT_BASE_URL)),
            api_key: self.api_key,
        }
    }
}

/// Trading Economics API client.
#[derive(Debug, Clone)]
pub struct TradingEconomicsClient {
    http: Client,
    base_url: String,
    api_key: ApiKey,
}

impl TradingEconomicsClient {
    /// Client against the production host with a default reqwest client.
    pub fn new(api_key: ApiKey) -> Self {
        TradingEconomicsClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: ApiKey) -> TradingEconomicsClientBuilder {
        TradingEconomicsClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/historical/country/{slug}/indicator/gdp?c={key}`
    ///
    /// The slug is percent-encoded as a single path segment, so
    /// "new zealand" becomes `new%20zealand`.
    pub fn series_url(&self, country_slug: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint(country_slug)?;
        url.query_pairs_mut()
            .append_pair("c", self.api_key.expose());
        Ok(url)
    }

    /// The series URL with the credential masked, for logs and errors.
    pub fn redacted_url(&self, country_slug: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint(country_slug)?;
        url.query_pairs_mut().append_pair("c", "***");
        Ok(url)
    }

    fn endpoint(&self, country_slug: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["historical", "country", country_slug, "indicator", "gdp"]);
        Ok(url)
    }
}

impl SeriesSource for TradingEconomicsClient {
    async fn fetch_series(&self, country_slug: &str) -> Result<Vec<RawObservation>, FetchError> {
        let url = self.series_url(country_slug)?;
        let shown = self.redacted_url(country_slug)?;
        info!("Fetching GDP series for '{}' from {}", country_slug, shown);

        let response = self.http.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Request failed for '{}': {}", country_slug, e);
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for '{}': {}", country_slug, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                country: country_slug.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            warn!("Failed to read response body for '{}': {}", country_slug, e);
            FetchError::Network(e.to_string())
        })?;

        let records = RawObservation::parse_observations(&body).map_err(|e| {
            warn!("Failed to decode response for '{}': {}", country_slug, e);
            FetchError::from(e)
        })?;
        info!("{} observations for '{}'", records.len(), country_slug);
        Ok(records)
    }
}
